/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr) to provide
/// user feedback while a large file is being rotated. Stdout is reserved
/// by the CLI contract, so implementations must never write there.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports byte-level progress
    ///
    /// # Arguments
    /// * `current` - Bytes consumed so far
    /// * `total` - Total input size in bytes, when known
    fn report_progress(&self, current: u64, total: Option<u64>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
