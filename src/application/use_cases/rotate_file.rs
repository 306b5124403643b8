use crate::application::dto::{RotateRequest, RotateResponse};
use crate::ports::outbound::{ProgressReporter, StreamProvider};
use crate::rotation::{self, RotationError};
use crate::shared::error::BitspinError;
use crate::shared::Result;
use std::fs;
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};

/// Stream buffer capacity. Fixed, so memory use stays independent of the
/// input size while the core consumes one byte at a time.
const STREAM_BUFFER_SIZE: usize = 64 * 1024;

/// RotateFileUseCase - Core use case for rotating one file into another
///
/// This use case orchestrates the rotation workflow using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `S` - StreamProvider implementation
/// * `P` - ProgressReporter implementation
pub struct RotateFileUseCase<S, P> {
    stream_provider: S,
    progress_reporter: P,
}

impl<S, P> RotateFileUseCase<S, P>
where
    S: StreamProvider,
    P: ProgressReporter,
{
    /// Creates a new RotateFileUseCase with injected dependencies
    pub fn new(stream_provider: S, progress_reporter: P) -> Self {
        Self {
            stream_provider,
            progress_reporter,
        }
    }

    /// Executes the rotation use case
    ///
    /// # Arguments
    /// * `request` - Rotation request carrying direction and both paths
    ///
    /// # Returns
    /// RotateResponse with the number of bytes rotated
    pub fn execute(&self, request: RotateRequest) -> Result<RotateResponse> {
        // Step 1: Refuse to rotate a file onto itself. The output is
        // truncated before the input is read, so aliased paths would
        // destroy the input.
        self.ensure_distinct_paths(&request)?;

        self.progress_reporter.report(&format!(
            "🔄 Rotating {} one bit {}",
            request.input_path.display(),
            request.direction
        ));

        // Step 2: Open both streams. Failures here are open errors,
        // reported before the core ever runs.
        let total = self.stream_provider.input_len(&request.input_path)?;
        let input = self.stream_provider.open_input(&request.input_path)?;
        let output = self.stream_provider.open_output(&request.output_path)?;

        // Step 3: Run the rotation core over buffered, byte-counting
        // streams.
        let mut reader = BufReader::with_capacity(
            STREAM_BUFFER_SIZE,
            ProgressReader::new(input, &self.progress_reporter, total),
        );
        let mut writer = BufWriter::with_capacity(STREAM_BUFFER_SIZE, output);

        let bytes_rotated = rotation::rotate(request.direction, &mut reader, &mut writer)
            .map_err(|e| self.map_rotation_error(e, &request))?;

        // Step 4: Push buffered bytes to the sink before claiming success.
        writer.flush().map_err(|e| BitspinError::WriteFailure {
            path: request.output_path.clone(),
            details: e.to_string(),
        })?;

        self.progress_reporter.report_completion(&format!(
            "✅ Rotated {} byte(s) into {}",
            bytes_rotated,
            request.output_path.display()
        ));

        Ok(RotateResponse { bytes_rotated })
    }

    /// Rejects requests whose input and output resolve to the same file.
    /// Canonicalization fails when the output does not exist yet; a path
    /// that cannot be resolved cannot alias an existing input.
    fn ensure_distinct_paths(&self, request: &RotateRequest) -> Result<()> {
        if let (Ok(canonical_input), Ok(canonical_output)) = (
            fs::canonicalize(&request.input_path),
            fs::canonicalize(&request.output_path),
        ) {
            if canonical_input == canonical_output {
                return Err(BitspinError::SamePath {
                    path: request.input_path.clone(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Attaches the offending path to a path-agnostic core error
    fn map_rotation_error(&self, error: RotationError, request: &RotateRequest) -> anyhow::Error {
        match error {
            RotationError::Read(e) => BitspinError::ReadFailure {
                path: request.input_path.clone(),
                details: e.to_string(),
            }
            .into(),
            RotationError::Write(e) => BitspinError::WriteFailure {
                path: request.output_path.clone(),
                details: e.to_string(),
            }
            .into(),
        }
    }
}

/// Read wrapper that feeds consumed byte counts to the progress reporter.
///
/// Sits underneath the BufReader, so progress ticks once per buffer refill
/// rather than once per byte.
struct ProgressReader<'a, R, P> {
    inner: R,
    reporter: &'a P,
    total: Option<u64>,
    position: u64,
}

impl<'a, R, P> ProgressReader<'a, R, P> {
    fn new(inner: R, reporter: &'a P, total: Option<u64>) -> Self {
        Self {
            inner,
            reporter,
            total,
            position: 0,
        }
    }
}

impl<R: Read, P: ProgressReporter> Read for ProgressReader<'_, R, P> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.position += n as u64;
        self.reporter.report_progress(self.position, self.total);
        Ok(n)
    }
}

impl<R: Seek, P> Seek for ProgressReader<'_, R, P> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        // The right-rotation patch phase rewinds the input; keep the
        // reported position in step with the stream.
        let new_position = self.inner.seek(pos)?;
        self.position = new_position;
        Ok(new_position)
    }
}
