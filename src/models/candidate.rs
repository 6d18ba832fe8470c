use serde::{Deserialize, Serialize};

/// One parsed resume. Immutable after creation; removal happens through
/// the owning [`CandidateCollection`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub name: String,
    pub email: String,
    pub raw_text: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<AiInsights>,
}

/// AI scoring payload. Present in the data model for forward compatibility
/// but never populated by this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsights {
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub questions: Vec<String>,
}

impl Candidate {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        raw_text: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            raw_text: raw_text.into(),
            file_name: file_name.into(),
            ai_insights: None,
        }
    }

    /// Raw-text excerpt for display, truncated at `max_chars` characters
    /// with a trailing ellipsis when the text is longer.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.raw_text.chars().count() <= max_chars {
            return self.raw_text.clone();
        }
        let truncated: String = self.raw_text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

/// Ordered candidate list. Insertion order is upload order; removal closes
/// the gap without reordering the remaining entries.
#[derive(Debug, Default)]
pub struct CandidateCollection {
    items: Vec<Candidate>,
}

impl CandidateCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, candidate: Candidate) {
        self.items.push(candidate);
    }

    /// Removes the entry at `index`. An out-of-range index is a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.items.iter()
    }
}
