use serde::{Deserialize, Serialize};

use crate::models::UploadedFile;

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Document classification produced by [`FormatSniffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unsupported,
}

pub struct FormatSniffer;

impl FormatSniffer {
    /// Classifies an upload by content, falling back to the filename
    /// extension when the bytes are inconclusive. Never fails; anything
    /// unrecognized is `Unsupported`.
    pub fn classify(file: &UploadedFile) -> DocumentKind {
        if let Some(kind) = Self::classify_content(&file.content) {
            return kind;
        }
        Self::classify_extension(&file.name)
    }

    fn classify_content(content: &[u8]) -> Option<DocumentKind> {
        if content.starts_with(PDF_MAGIC) {
            return Some(DocumentKind::Pdf);
        }
        // A DOCX is a ZIP archive whose entry names include "word/".
        // A ZIP without that marker stays inconclusive rather than being
        // rejected outright, so the extension fallback still applies.
        if content.starts_with(ZIP_MAGIC) && contains_subslice(content, b"word/") {
            return Some(DocumentKind::Docx);
        }
        None
    }

    // Case-sensitive suffix match, mirroring the upstream picker contract.
    fn classify_extension(name: &str) -> DocumentKind {
        if name.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if name.ends_with(".docx") {
            DocumentKind::Docx
        } else {
            DocumentKind::Unsupported
        }
    }
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
