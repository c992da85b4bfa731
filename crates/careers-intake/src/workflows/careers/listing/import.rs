use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::{CatalogError, JobCatalog, JobId, JobPosting};

const SKILL_SEPARATOR: char = ';';

impl JobCatalog {
    /// Load an externally maintained catalog, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "json" => Self::from_json_reader(File::open(path)?)?,
            "csv" => Self::from_csv_reader(File::open(path)?)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        tracing::info!(
            path = %path.display(),
            postings = catalog.len(),
            "loaded job catalog"
        );
        Ok(catalog)
    }

    /// Parse a JSON array of postings.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let postings: Vec<JobPosting> = serde_json::from_reader(reader)?;
        Self::new(postings)
    }

    /// Parse a CSV export with `id,title,location,type,category,description,skills`
    /// columns, where skills are `;`-separated.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut postings = Vec::new();
        for row in csv_reader.deserialize::<PostingRow>() {
            postings.push(row?.into_posting());
        }

        Self::new(postings)
    }
}

#[derive(Debug, Deserialize)]
struct PostingRow {
    id: String,
    title: String,
    location: String,
    #[serde(rename = "type")]
    employment_type: String,
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default, deserialize_with = "split_skills")]
    skills: Vec<String>,
}

impl PostingRow {
    fn into_posting(self) -> JobPosting {
        JobPosting {
            id: JobId(self.id),
            title: self.title,
            location: self.location,
            employment_type: self.employment_type,
            category: self.category,
            description: self.description,
            skills: self.skills,
        }
    }
}

fn split_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .split(SKILL_SEPARATOR)
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect())
}
