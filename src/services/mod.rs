pub mod docx_extractor;
pub mod field_extractor;
pub mod format_sniffer;

pub use docx_extractor::DocxExtractor;
pub use field_extractor::{extract_fields, ExtractedFields};
pub use format_sniffer::{DocumentKind, FormatSniffer};
