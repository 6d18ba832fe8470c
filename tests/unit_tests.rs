//! Unit tests for individual components

use resume_triage::{
    config::Config,
    error::IngestError,
    models::{Candidate, CandidateCollection, JobDescription, UploadedFile},
    services::{extract_fields, DocumentKind, FormatSniffer},
};
use std::env;

#[test]
fn test_config_defaults() {
    env::remove_var("MAX_FILE_SIZE_MB");
    env::remove_var("MAX_BATCH_FILES");

    let config = Config::from_env().unwrap();
    assert_eq!(config.max_file_size_mb, 10);
    assert_eq!(config.max_batch_files, 50);
}

#[test]
fn test_error_codes() {
    assert_eq!(IngestError::UnsupportedPdf.error_code(), "UNSUPPORTED_PDF");
    assert_eq!(
        IngestError::UnsupportedFormat.error_code(),
        "UNSUPPORTED_FORMAT"
    );
    assert_eq!(
        IngestError::extraction("bad archive").error_code(),
        "EXTRACTION_FAILURE"
    );
    assert_eq!(
        IngestError::FileTooLarge { size: 20, limit: 10 }.error_code(),
        "FILE_TOO_LARGE"
    );
    assert_eq!(IngestError::validation("test").error_code(), "VALIDATION_ERROR");
    assert_eq!(IngestError::config("test").error_code(), "CONFIG_ERROR");
}

#[test]
fn test_per_file_error_messages_are_generic() {
    // The surfaced string never differentiates the underlying cause.
    let err = IngestError::extraction("zip central directory truncated");
    assert_eq!(err.to_string(), "Error parsing file");
    assert_eq!(err.detail(), Some("zip central directory truncated"));

    assert_eq!(
        IngestError::UnsupportedPdf.to_string(),
        "PDF parsing is not supported in this environment"
    );
    assert_eq!(
        IngestError::UnsupportedFormat.to_string(),
        "Unsupported file type"
    );
}

#[test]
fn test_sniffer_detects_pdf_by_magic_bytes() {
    let file = UploadedFile::new("resume", b"%PDF-1.4\nsome content".to_vec());
    assert_eq!(FormatSniffer::classify(&file), DocumentKind::Pdf);
}

#[test]
fn test_sniffer_detects_docx_by_zip_marker() {
    let mut content = b"PK\x03\x04".to_vec();
    content.extend_from_slice(b"word/document.xml trailing bytes");
    let file = UploadedFile::new("resume", content);
    assert_eq!(FormatSniffer::classify(&file), DocumentKind::Docx);
}

#[test]
fn test_sniffer_falls_back_to_extension() {
    let file = UploadedFile::new("resume.pdf", b"not a real pdf".to_vec());
    assert_eq!(FormatSniffer::classify(&file), DocumentKind::Pdf);

    let file = UploadedFile::new("resume.docx", b"not a real docx".to_vec());
    assert_eq!(FormatSniffer::classify(&file), DocumentKind::Docx);
}

#[test]
fn test_sniffer_extension_match_is_case_sensitive() {
    let file = UploadedFile::new("resume.PDF", b"garbage".to_vec());
    assert_eq!(FormatSniffer::classify(&file), DocumentKind::Unsupported);

    let file = UploadedFile::new("resume.DOCX", b"garbage".to_vec());
    assert_eq!(FormatSniffer::classify(&file), DocumentKind::Unsupported);
}

#[test]
fn test_sniffer_inconclusive_input_is_unsupported() {
    let file = UploadedFile::new("notes.txt", b"plain text resume".to_vec());
    assert_eq!(FormatSniffer::classify(&file), DocumentKind::Unsupported);

    // A ZIP without a word/ entry is not a DOCX by content, and the
    // extension does not rescue it either.
    let file = UploadedFile::new("archive.zip", b"PK\x03\x04other/stuff".to_vec());
    assert_eq!(FormatSniffer::classify(&file), DocumentKind::Unsupported);
}

#[test]
fn test_name_extraction_first_match_wins() {
    let fields = extract_fields("Resume of Jane Doe, also known as John Smith");
    assert_eq!(fields.name, "Jane Doe");

    let fields = extract_fields("... Jane Doe is a senior engineer ...");
    assert_eq!(fields.name, "Jane Doe");
}

#[test]
fn test_name_extraction_no_match_yields_empty() {
    let fields = extract_fields("no capitalized pairs here");
    assert_eq!(fields.name, "");

    let fields = extract_fields("");
    assert_eq!(fields.name, "");
    assert_eq!(fields.email, "");
}

#[test]
fn test_name_extraction_false_positives_on_company_names() {
    // Known behavioral property of the naive pattern, kept by contract.
    let fields = extract_fields("Employed at Acme Corp since 2019");
    assert_eq!(fields.name, "Acme Corp");
}

#[test]
fn test_email_extraction() {
    let fields = extract_fields("contact jane.doe@example.com now");
    assert_eq!(fields.email, "jane.doe@example.com");

    let fields = extract_fields("no at-shaped token in sight");
    assert_eq!(fields.email, "");
}

#[test]
fn test_field_extraction_is_idempotent() {
    let text = "Jane Doe\njane.doe@example.com\nSoftware Engineer";
    let first = extract_fields(text);
    let second = extract_fields(text);
    assert_eq!(first, second);
    assert_eq!(first.name, "Jane Doe");
    assert_eq!(first.email, "jane.doe@example.com");
}

#[test]
fn test_job_validation() {
    let job = JobDescription::new("Engineer", "Rust", "BSc", "Build things");
    assert!(job.validate().is_ok());

    let job = JobDescription::new("E", "Rust", "BSc", "Build things");
    assert!(job.validate().is_err());

    let job = JobDescription::new("Engineer", "", "BSc", "Build things");
    assert!(job.validate().is_err());

    let job = JobDescription::new("Engineer", "Rust", "BSc", "   ");
    assert!(job.validate().is_err());
}

#[test]
fn test_candidate_preview_truncation() {
    let candidate = Candidate::new("", "", "a".repeat(400), "resume.docx");
    let preview = candidate.preview(300);
    assert_eq!(preview.chars().count(), 303);
    assert!(preview.ends_with("..."));

    let candidate = Candidate::new("", "", "short text", "resume.docx");
    assert_eq!(candidate.preview(300), "short text");
}

#[test]
fn test_candidate_serialization_uses_camel_case() {
    let candidate = Candidate::new("Jane Doe", "jane@example.com", "raw", "resume.docx");
    let json = serde_json::to_value(&candidate).unwrap();

    assert_eq!(json["name"], "Jane Doe");
    assert_eq!(json["email"], "jane@example.com");
    assert_eq!(json["rawText"], "raw");
    assert_eq!(json["fileName"], "resume.docx");
    // aiInsights is never populated and absent keys are omitted
    assert!(json.get("aiInsights").is_none());
}

#[test]
fn test_collection_remove_preserves_order() {
    let mut collection = CandidateCollection::new();
    for name in ["a.docx", "b.docx", "c.docx"] {
        collection.push(Candidate::new("", "", "", name));
    }

    collection.remove(1);
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.get(0).unwrap().file_name, "a.docx");
    assert_eq!(collection.get(1).unwrap().file_name, "c.docx");
}

#[test]
fn test_collection_out_of_range_remove_is_noop() {
    let mut collection = CandidateCollection::new();
    collection.push(Candidate::new("", "", "", "a.docx"));

    collection.remove(5);
    assert_eq!(collection.len(), 1);

    let mut empty = CandidateCollection::new();
    empty.remove(0);
    assert!(empty.is_empty());
}
