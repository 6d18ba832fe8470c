pub mod candidate;
pub mod job;
pub mod upload;

pub use candidate::{AiInsights, Candidate, CandidateCollection};
pub use job::JobDescription;
pub use upload::UploadedFile;
