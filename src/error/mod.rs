pub mod types;

pub use types::{IngestError, IngestResult};
