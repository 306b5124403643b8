use std::io;
use thiserror::Error;

/// Result type for rotation operations.
pub type Result<T> = std::result::Result<T, RotationError>;

/// Stream-level failures during a rotation.
///
/// The domain layer does not know which paths back the streams, so these
/// variants carry only the underlying I/O error; the application layer
/// attaches the offending path when it maps them to user-facing errors.
/// End-of-stream is not an error and never appears here.
#[derive(Debug, Error)]
pub enum RotationError {
    #[error("read error: {0}")]
    Read(#[source] io::Error),

    #[error("write error: {0}")]
    Write(#[source] io::Error),
}
