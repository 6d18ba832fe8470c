use once_cell::sync::Lazy;
use regex::Regex;

// Two consecutive title-cased tokens. Intentionally naive: any pair of
// capitalized words matches, company names included. First match wins, and
// the exact semantics are part of the ingestion contract.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z][a-z]+\s[A-Z][a-z]+").unwrap());

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.[A-Za-z]{2,}").unwrap());

/// Best-effort fields recovered from resume text. Empty string means no
/// match; recovery never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub name: String,
    pub email: String,
}

/// Recovers a candidate name and email address from raw text.
///
/// Pure and total: identical input always yields identical output, and
/// no-match input yields empty strings rather than an error.
pub fn extract_fields(text: &str) -> ExtractedFields {
    let name = NAME_PATTERN
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let email = EMAIL_PATTERN
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    ExtractedFields { name, email }
}
