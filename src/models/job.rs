use serde::{Deserialize, Serialize};

use crate::error::{IngestError, IngestResult};

/// Job description supplied by the recruiter's form.
///
/// The pipeline only reads its presence as an upload gate; the field
/// content is never consumed during ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescription {
    pub title: String,
    pub skills: String,
    pub qualifications: String,
    pub description: String,
}

impl JobDescription {
    pub fn new(
        title: impl Into<String>,
        skills: impl Into<String>,
        qualifications: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            skills: skills.into(),
            qualifications: qualifications.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> IngestResult<()> {
        if self.title.trim().chars().count() < 2 {
            return Err(IngestError::validation("Title is required"));
        }
        if self.skills.trim().is_empty() {
            return Err(IngestError::validation("Skills are required"));
        }
        if self.qualifications.trim().is_empty() {
            return Err(IngestError::validation("Qualifications are required"));
        }
        if self.description.trim().is_empty() {
            return Err(IngestError::validation("Description is required"));
        }
        Ok(())
    }
}
