//! Portfolio case studies listed on the projects page.

mod content;
pub mod router;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use router::projects_router;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCaseStudy {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub client: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub results: Vec<String>,
}

/// Immutable, ordered set of case studies.
#[derive(Debug, Clone)]
pub struct ProjectShowcase {
    projects: Arc<[ProjectCaseStudy]>,
}

impl ProjectShowcase {
    pub fn new(projects: impl Into<Arc<[ProjectCaseStudy]>>) -> Self {
        Self {
            projects: projects.into(),
        }
    }

    pub fn standard() -> Self {
        Self::new(content::standard_projects())
    }

    pub fn projects(&self) -> &[ProjectCaseStudy] {
        &self.projects
    }

    pub fn find(&self, id: u32) -> Option<&ProjectCaseStudy> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Distinct categories in first-occurrence order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for project in self.projects.iter() {
            if !seen.contains(&project.category.as_str()) {
                seen.push(project.category.as_str());
            }
        }
        seen
    }
}
