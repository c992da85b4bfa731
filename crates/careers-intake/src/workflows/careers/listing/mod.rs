//! Job catalog and the category filter driving the open positions list.

mod import;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

use super::content::standard_positions;

/// Sentinel label selecting every category.
pub const ALL_CATEGORIES: &str = "All";

/// Opaque identifier of a posting, unique within its catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An advertised opening as shown on a job card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Category currently selected in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Interpret a raw filter label. Blank input and `"All"` select everything.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(trimmed.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(category) => category,
        }
    }

    pub fn matches(&self, posting: &JobPosting) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => posting.category == *category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Postings visible under `selected`, in catalog order.
pub fn visible_jobs<'a>(catalog: &'a [JobPosting], selected: &CategoryFilter) -> Vec<&'a JobPosting> {
    catalog
        .iter()
        .filter(|posting| selected.matches(posting))
        .collect()
}

/// `All` followed by each distinct catalog category in first-occurrence order.
pub fn categories(catalog: &[JobPosting]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let mut options = vec![CategoryFilter::All];
    for posting in catalog {
        if seen.insert(posting.category.as_str()) {
            options.push(CategoryFilter::Category(posting.category.clone()));
        }
    }
    options
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("job id '{0}' appears more than once in the catalog")]
    DuplicateId(JobId),
    #[error("unable to read job catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON job catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV job catalog: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported job catalog format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),
}

/// Immutable, shared list of postings for the session.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    postings: Arc<[JobPosting]>,
}

impl JobCatalog {
    pub fn new(postings: Vec<JobPosting>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for posting in &postings {
            if !ids.insert(&posting.id) {
                return Err(CatalogError::DuplicateId(posting.id.clone()));
            }
        }

        Ok(Self {
            postings: postings.into(),
        })
    }

    /// The openings currently advertised on the careers page.
    pub fn standard() -> Self {
        Self {
            postings: standard_positions().into(),
        }
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&JobPosting> {
        self.postings.iter().find(|posting| posting.id.0 == id)
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        categories(&self.postings)
    }

    pub fn visible(&self, selected: &CategoryFilter) -> Vec<&JobPosting> {
        visible_jobs(&self.postings, selected)
    }
}

/// One button in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub label: String,
    pub selected: bool,
}

/// The open positions section: a catalog plus the selected filter.
#[derive(Debug, Clone)]
pub struct OpenPositions {
    catalog: JobCatalog,
    selected: CategoryFilter,
}

impl OpenPositions {
    pub fn new(catalog: JobCatalog) -> Self {
        Self {
            catalog,
            selected: CategoryFilter::All,
        }
    }

    pub fn select(&mut self, filter: impl Into<CategoryFilter>) {
        self.selected = filter.into();
        tracing::debug!(category = %self.selected, "category filter selected");
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    pub fn filter_bar(&self) -> Vec<CategoryOption> {
        self.catalog
            .categories()
            .into_iter()
            .map(|category| CategoryOption {
                selected: category == self.selected,
                label: category.label().to_string(),
            })
            .collect()
    }

    pub fn visible(&self) -> Vec<&JobPosting> {
        self.catalog.visible(&self.selected)
    }
}
