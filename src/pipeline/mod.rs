use tracing::{info, warn};

use crate::config::Config;
use crate::models::{Candidate, UploadedFile};
use crate::services::{extract_fields, DocxExtractor, FormatSniffer};

/// Outcome of one upload batch: ingested candidates and per-file error
/// strings, each in batch order. A file contributes at most one candidate
/// or one error, never both.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub candidates: Vec<Candidate>,
    pub errors: Vec<String>,
}

/// Per-file orchestration: classify, extract text, recover fields.
///
/// Files are processed sequentially; one file's failure never aborts the
/// rest of the batch.
pub struct IngestionPipeline {
    extractor: DocxExtractor,
}

impl IngestionPipeline {
    pub fn new(config: &Config) -> Self {
        Self {
            extractor: DocxExtractor::new(config.max_file_size_mb),
        }
    }

    pub async fn ingest_batch(&self, files: Vec<UploadedFile>) -> BatchReport {
        let batch_id = uuid::Uuid::new_v4().to_string()[..8].to_string();

        info!(
            batch_id = %batch_id,
            file_count = files.len(),
            "Starting resume ingestion batch"
        );

        let mut report = BatchReport::default();

        for file in files {
            let kind = FormatSniffer::classify(&file);

            let text = match self.extractor.extract(kind, &file).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(
                        batch_id = %batch_id,
                        file_name = %file.name,
                        error_code = e.error_code(),
                        detail = e.detail().unwrap_or(""),
                        "File skipped"
                    );
                    report.errors.push(format!("{}: {}", file.name, e));
                    continue;
                }
            };

            let fields = extract_fields(&text);

            info!(
                batch_id = %batch_id,
                file_name = %file.name,
                text_length = text.len(),
                name_found = !fields.name.is_empty(),
                email_found = !fields.email.is_empty(),
                "Resume ingested"
            );

            report
                .candidates
                .push(Candidate::new(fields.name, fields.email, text, file.name));
        }

        info!(
            batch_id = %batch_id,
            ingested = report.candidates.len(),
            failed = report.errors.len(),
            "Batch completed"
        );

        report
    }
}
