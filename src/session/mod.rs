use tracing::info;

use crate::config::Config;
use crate::error::{IngestError, IngestResult};
use crate::models::{Candidate, CandidateCollection, JobDescription, UploadedFile};
use crate::pipeline::IngestionPipeline;

/// Per-session state owned by the application layer: the saved job, the
/// candidate collection, and the most recent batch's error list.
///
/// A session supports one in-flight batch at a time; `&mut self` on
/// [`Session::ingest`] enforces that without internal locking. Created at
/// session start, dropped at session end, nothing persisted.
pub struct Session {
    config: Config,
    pipeline: IngestionPipeline,
    job: Option<JobDescription>,
    candidates: CandidateCollection,
    batch_errors: Vec<String>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let pipeline = IngestionPipeline::new(&config);
        Self {
            config,
            pipeline,
            job: None,
            candidates: CandidateCollection::new(),
            batch_errors: Vec::new(),
        }
    }

    /// Saves the job description. A job is saved once per session and is
    /// immutable thereafter.
    pub fn save_job(&mut self, job: JobDescription) -> IngestResult<()> {
        if self.job.is_some() {
            return Err(IngestError::JobAlreadyDefined);
        }
        job.validate()?;

        info!(title = %job.title, "Job description saved");
        self.job = Some(job);
        Ok(())
    }

    pub fn job(&self) -> Option<&JobDescription> {
        self.job.as_ref()
    }

    /// Runs one upload batch. Uploads are gated on a saved job; per-file
    /// failures land in the batch error list rather than failing the call.
    pub async fn ingest(&mut self, files: Vec<UploadedFile>) -> IngestResult<()> {
        if self.job.is_none() {
            return Err(IngestError::NoJobDefined);
        }
        if files.len() > self.config.max_batch_files {
            return Err(IngestError::validation(format!(
                "Batch of {} files exceeds limit of {}",
                files.len(),
                self.config.max_batch_files
            )));
        }

        self.batch_errors.clear();

        let report = self.pipeline.ingest_batch(files).await;
        for candidate in report.candidates {
            self.candidates.push(candidate);
        }
        self.batch_errors = report.errors;

        Ok(())
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.candidates.as_slice()
    }

    /// Removes the candidate at `index`; out-of-range is a no-op.
    pub fn remove_candidate(&mut self, index: usize) {
        self.candidates.remove(index);
    }

    /// Error strings from the most recent batch.
    pub fn batch_errors(&self) -> &[String] {
        &self.batch_errors
    }
}
