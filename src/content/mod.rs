//! Content discovery, loading, and question extraction.
//!
//! The pipeline is read-only and best-effort: files that cannot be parsed
//! are reported as skipped, never as failures.

pub mod extractor;
pub mod loader;
pub mod locator;

pub use extractor::{extract_questions, Question};
pub use loader::{load_content_file, ContentRecord, LoadOutcome, QuestionRecord};
pub use locator::find_content_files;
