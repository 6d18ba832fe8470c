use tracing::{debug, info};

use crate::error::{IngestError, IngestResult};
use crate::models::UploadedFile;
use crate::services::format_sniffer::DocumentKind;

/// Plain-text extraction for classified uploads.
///
/// Only DOCX is decodable. PDF is a deliberate capability limit, not a
/// transient failure, and is signalled as such.
pub struct DocxExtractor {
    max_file_size_mb: usize,
}

impl DocxExtractor {
    pub fn new(max_file_size_mb: usize) -> Self {
        Self { max_file_size_mb }
    }

    pub async fn extract(&self, kind: DocumentKind, file: &UploadedFile) -> IngestResult<String> {
        match kind {
            DocumentKind::Pdf => Err(IngestError::UnsupportedPdf),
            DocumentKind::Unsupported => Err(IngestError::UnsupportedFormat),
            DocumentKind::Docx => self.extract_docx(file),
        }
    }

    fn extract_docx(&self, file: &UploadedFile) -> IngestResult<String> {
        info!(
            file_name = %file.name,
            file_size = file.size,
            "Starting DOCX text extraction"
        );

        let max_size_bytes = self.max_file_size_mb * 1024 * 1024;
        if file.size > max_size_bytes {
            return Err(IngestError::FileTooLarge {
                size: file.size / (1024 * 1024),
                limit: self.max_file_size_mb,
            });
        }

        let doc = docx_rs::read_docx(&file.content)
            .map_err(|e| IngestError::extraction(e.to_string()))?;

        let mut text = String::new();
        for child in doc.document.children {
            match child {
                docx_rs::DocumentChild::Paragraph(p) => {
                    for child in p.children {
                        if let docx_rs::ParagraphChild::Run(run) = child {
                            for child in run.children {
                                if let docx_rs::RunChild::Text(t) = child {
                                    text.push_str(&t.text);
                                }
                            }
                        }
                    }
                    text.push('\n');
                }
                // Tables carry no paragraph text we surface
                docx_rs::DocumentChild::Table(_) => {}
                _ => {}
            }
        }

        debug!(
            file_name = %file.name,
            text_length = text.len(),
            "DOCX text extraction successful"
        );

        Ok(text)
    }
}
