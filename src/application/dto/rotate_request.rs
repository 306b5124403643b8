use crate::rotation::Direction;
use crate::shared::error::BitspinError;
use crate::shared::Result;
use std::path::PathBuf;

/// RotateRequest - Internal request DTO for the rotate-file use case
///
/// This DTO represents the internal request structure used within the
/// application layer. The CLI maps its parsed arguments onto it.
#[derive(Debug, Clone)]
pub struct RotateRequest {
    /// Direction of the single-bit rotation
    pub direction: Direction,
    /// File whose bits are rotated
    pub input_path: PathBuf,
    /// Destination file, created or truncated
    pub output_path: PathBuf,
}

impl RotateRequest {
    pub fn builder() -> RotateRequestBuilder {
        RotateRequestBuilder::default()
    }
}

/// Builder for RotateRequest with field validation
#[derive(Debug, Default)]
pub struct RotateRequestBuilder {
    direction: Option<Direction>,
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

impl RotateRequestBuilder {
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<RotateRequest> {
        let direction = self.direction.ok_or_else(|| BitspinError::Validation {
            message: "direction is required".to_string(),
        })?;
        let input_path = self.input_path.ok_or_else(|| BitspinError::Validation {
            message: "input_path is required".to_string(),
        })?;
        let output_path = self.output_path.ok_or_else(|| BitspinError::Validation {
            message: "output_path is required".to_string(),
        })?;

        Ok(RotateRequest {
            direction,
            input_path,
            output_path,
        })
    }
}
