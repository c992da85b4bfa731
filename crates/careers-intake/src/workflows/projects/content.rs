use super::ProjectCaseStudy;

pub(super) fn standard_projects() -> Vec<ProjectCaseStudy> {
    vec![
        case_study(
            1,
            "HealthTech Pro",
            "Healthcare",
            "MedCare Solutions",
            "A comprehensive patient management system with real-time analytics, telemedicine integration, and HIPAA-compliant data handling.",
            "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?auto=format&fit=crop&w=1200&q=80",
            &["React", "Node.js", "PostgreSQL", "AWS"],
            &["40% faster patient onboarding", "99.9% uptime achieved", "50K+ active users"],
        ),
        case_study(
            2,
            "ShopStream Commerce",
            "Retail",
            "Fashion Forward Inc.",
            "Scalable e-commerce platform with advanced search, AI-powered recommendations, and seamless multi-currency checkout.",
            "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?auto=format&fit=crop&w=1200&q=80",
            &["Next.js", "Stripe", "MongoDB", "Algolia"],
            &["300% increase in conversions", "$2M+ processed monthly", "Sub-second load times"],
        ),
        case_study(
            3,
            "FinanceFlow Dashboard",
            "Finance",
            "Capital Insights",
            "Enterprise financial analytics platform with real-time market data, AI-powered insights, and regulatory compliance tools.",
            "https://images.unsplash.com/photo-1563986768494-4dee2763ff3f?auto=format&fit=crop&w=1200&q=80",
            &["React", "Python", "AWS", "TensorFlow"],
            &["60% reduction in reporting time", "Real-time data processing", "SOC 2 compliant"],
        ),
        case_study(
            4,
            "EduLearn Platform",
            "Education",
            "Global Academy",
            "Interactive learning management system with video conferencing, progress tracking, and gamification elements.",
            "https://images.unsplash.com/photo-1501504905252-473c47e087f8?auto=format&fit=crop&w=1200&q=80",
            &["Vue.js", "Django", "WebRTC", "Redis"],
            &["100K+ students enrolled", "95% completion rate", "4.8★ user satisfaction"],
        ),
        case_study(
            5,
            "LogiTrack Fleet",
            "Logistics",
            "TransCargo Ltd.",
            "Real-time fleet management and logistics optimization platform with IoT integration and predictive maintenance.",
            "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?auto=format&fit=crop&w=1200&q=80",
            &["React Native", "Go", "PostgreSQL", "IoT"],
            &["25% fuel cost reduction", "Real-time tracking", "Predictive maintenance"],
        ),
        case_study(
            6,
            "PropTech Manager",
            "Real Estate",
            "Urban Properties",
            "Property management platform with tenant portal, maintenance tracking, and financial reporting dashboards.",
            "https://images.unsplash.com/photo-1560518883-ce09059eeffa?auto=format&fit=crop&w=1200&q=80",
            &["Angular", "Node.js", "MongoDB", "Stripe"],
            &["10K+ properties managed", "90% tenant satisfaction", "Automated rent collection"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn case_study(
    id: u32,
    title: &str,
    category: &str,
    client: &str,
    description: &str,
    image: &str,
    tags: &[&str],
    results: &[&str],
) -> ProjectCaseStudy {
    ProjectCaseStudy {
        id,
        title: title.to_string(),
        category: category.to_string(),
        client: client.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        results: results.iter().map(|result| result.to_string()).collect(),
    }
}
