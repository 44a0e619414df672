//! The resume input record.
//!
//! One JSON file produces exactly one `ResumeData`, parsed once per process
//! invocation and immutable afterwards. Field names in the JSON are
//! camelCase. The `jobs` collection is an open map: any keys may be
//! present, and the template decides which of them are rendered.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub title: String,
    pub summary: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub jobs: HashMap<String, Job>,
    pub skills: Skills,
    pub portfolio: Portfolio,
    pub education: Education,
    /// Output path for the rendered document, used verbatim.
    pub pdf_filename: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub employer: String,
    pub job_title: String,
    pub time_with_month: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub tech: Vec<String>,
    pub other_tech: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub github: PortfolioEntry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioEntry {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub name: String,
    pub degree: String,
    pub major: String,
}

impl ResumeData {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
