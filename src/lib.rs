//! bitspin - rotate a whole file bitwise by one bit position
//!
//! The input file is treated as a single big-endian bit string; the output
//! file holds the same bits cyclically shifted by one position, left or
//! right, in constant memory regardless of file size.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`rotation`): The streaming rotation core
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bitspin::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let stream_provider = FileSystemStreams::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = RotateFileUseCase::new(stream_provider, progress_reporter);
//!
//! // Execute
//! let request = RotateRequest::builder()
//!     .direction(Direction::Left)
//!     .input_path("input.bin")
//!     .output_path("output.bin")
//!     .build()?;
//! let response = use_case.execute(request)?;
//! eprintln!("rotated {} bytes", response.bytes_rotated);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod ports;
pub mod rotation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemStreams;
    pub use crate::application::dto::{RotateRequest, RotateResponse};
    pub use crate::application::use_cases::RotateFileUseCase;
    pub use crate::ports::outbound::{ProgressReporter, StreamProvider};
    pub use crate::rotation::{Direction, RotationError};
    pub use crate::shared::{BitspinError, ExitCode, Result};
}
