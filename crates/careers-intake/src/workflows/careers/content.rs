use super::listing::{JobId, JobPosting};
use super::testimonials::Testimonial;

pub(super) fn standard_positions() -> Vec<JobPosting> {
    vec![
        posting(
            "1",
            "Senior Full-Stack Developer",
            "Remote",
            "Full-Time",
            "Engineering",
            "Lead the development of scalable web applications using React, Node.js, and cloud technologies. Mentor junior developers and drive technical decisions.",
            &["React", "Node.js", "TypeScript", "AWS"],
        ),
        posting(
            "2",
            "UI/UX Designer",
            "Hybrid - Lahore",
            "Full-Time",
            "Design",
            "Create beautiful, intuitive user experiences for our clients. Work closely with developers to bring designs to life with pixel-perfect precision.",
            &["Figma", "Adobe XD", "Prototyping"],
        ),
        posting(
            "3",
            "DevOps Engineer",
            "Remote",
            "Full-Time",
            "Engineering",
            "Build and maintain CI/CD pipelines, manage cloud infrastructure, and ensure high availability of our production systems.",
            &["Docker", "Kubernetes", "AWS"],
        ),
        posting(
            "4",
            "Project Manager",
            "On-site - Karachi",
            "Full-Time",
            "Management",
            "Coordinate cross-functional teams, manage client relationships, and ensure successful delivery of digital projects.",
            &["Agile", "Scrum", "Jira"],
        ),
        posting(
            "5",
            "Junior React Developer",
            "Remote",
            "Full-Time",
            "Engineering",
            "Join our frontend team to build modern web applications. Great opportunity for developers with 1-2 years of React experience.",
            &["React", "JavaScript", "CSS"],
        ),
        posting(
            "6",
            "Content Writer",
            "Remote",
            "Part-Time",
            "Marketing",
            "Create compelling content for our blog, case studies, and marketing materials. Tech industry experience preferred.",
            &["SEO", "Copywriting", "Research"],
        ),
    ]
}

pub(super) fn standard_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Sarah Ahmed".to_string(),
            role: "Senior Developer".to_string(),
            tenure: "3 years at WMSols".to_string(),
            image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&h=150&fit=crop&crop=face".to_string(),
            quote: "Joining WMSols was the best career decision I've made. The team is incredibly supportive, and I've grown more in three years here than in my entire previous career. The projects are challenging but rewarding.".to_string(),
        },
        Testimonial {
            name: "Ahmed Khan".to_string(),
            role: "UI/UX Designer".to_string(),
            tenure: "2 years at WMSols".to_string(),
            image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face".to_string(),
            quote: "The creative freedom I have here is unmatched. WMSols trusts its designers to push boundaries and try new things. Plus, the work-life balance is genuinely respected, not just talked about.".to_string(),
        },
        Testimonial {
            name: "Fatima Malik".to_string(),
            role: "Project Manager".to_string(),
            tenure: "4 years at WMSols".to_string(),
            image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face".to_string(),
            quote: "What sets WMSols apart is the genuine care for employee wellbeing. From flexible hours to mental health days, they walk the talk. I've never felt more valued in my professional life.".to_string(),
        },
    ]
}

fn posting(
    id: &str,
    title: &str,
    location: &str,
    employment_type: &str,
    category: &str,
    description: &str,
    skills: &[&str],
) -> JobPosting {
    JobPosting {
        id: JobId(id.to_string()),
        title: title.to_string(),
        location: location.to_string(),
        employment_type: employment_type.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
    }
}
