use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the output file holds the rotated bits
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (open failure, read error, write error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for file rotation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum BitspinError {
    #[error("Failed to open input file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    InputOpen { path: PathBuf, details: String },

    #[error("Failed to open output file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    OutputOpen { path: PathBuf, details: String },

    #[error("An error occurred whilst reading from {path}\nDetails: {details}")]
    ReadFailure { path: PathBuf, details: String },

    #[error("An error occurred whilst writing to {path}\nDetails: {details}\n\n💡 Hint: Please verify that the destination volume has free space")]
    WriteFailure { path: PathBuf, details: String },

    #[error("Input and output refer to the same file: {path}\n\n💡 Hint: The output is truncated before the input is read, so rotating a file onto itself would destroy it. Please choose a different output path")]
    SamePath { path: PathBuf },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
