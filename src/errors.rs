use thiserror::Error;

/// The central error type for factlint.
///
/// Content-level problems (unreadable or malformed files) are never errors:
/// the loader degrades them to skipped files so one bad artifact cannot
/// blind the audit to the rest of the tree. What remains here are harness
/// failures (bad configuration, report rendering) and the audit verdict
/// itself, which the CLI surfaces as a distinct exit code.
#[derive(Error, Debug)]
pub enum FactlintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Audit failed: {violations} violation(s) found")]
    AuditFailed { violations: usize },

    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FactlintError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_VIOLATIONS: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;
pub const EXIT_ERROR: u8 = 3;

/// Determine the appropriate process exit code for an error.
///
/// Violations get their own code so CI can distinguish "the content is
/// wrong" (fix the content) from "the tool broke" (fix the invocation).
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(err) = e.downcast_ref::<FactlintError>() {
        return match err {
            FactlintError::AuditFailed { .. } => EXIT_VIOLATIONS,
            FactlintError::Config(_) => EXIT_CONFIG_ERROR,
            _ => EXIT_ERROR,
        };
    }

    EXIT_ERROR
}
