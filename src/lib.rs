//! Resume Triage Core
//!
//! An in-process library for ingesting candidate resumes. Uploaded byte
//! buffers are classified by format, DOCX documents are reduced to plain
//! text, and a best-effort candidate name and email are recovered by
//! pattern matching. PDF text extraction is deliberately unsupported.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod session;

pub use config::Config;
pub use error::{IngestError, IngestResult};
pub use models::{AiInsights, Candidate, CandidateCollection, JobDescription, UploadedFile};
pub use pipeline::{BatchReport, IngestionPipeline};
pub use services::{extract_fields, DocumentKind, DocxExtractor, ExtractedFields, FormatSniffer};
pub use session::Session;
