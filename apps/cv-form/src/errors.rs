use thiserror::Error;

/// Errors raised by form edits. Returned to the caller, never swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Invalid argument: experience index {index} out of range (len {len})")]
    InvalidArgument { index: usize, len: usize },

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// Everything that can go wrong between pressing submit and having the PDF on disk.
/// The controller logs and swallows these; they never reach the edit path.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PDF service error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("PDF service returned an empty body")]
    EmptyBody,

    #[error("Download failed: {0}")]
    Download(#[from] std::io::Error),
}
