use crate::shared::Result;
use std::io::{Read, Seek, Write};
use std::path::Path;

/// StreamProvider port for opening the byte streams of a rotation
///
/// This port abstracts how the input and output streams come into
/// existence (file system, in-memory buffers in tests). The rotation core
/// only ever sees the opened streams; open failures surface here, before
/// the core runs, and are distinct from the read/write errors the core
/// reports.
pub trait StreamProvider {
    /// Readable input stream; seekable because a right rotation re-reads
    /// the first byte after the forward pass
    type Input: Read + Seek;
    /// Writable, seekable output stream; the right-rotation patch phase
    /// rewinds it to overwrite the reserved first byte in place
    type Output: Read + Write + Seek;

    /// Opens the input stream for reading
    ///
    /// # Errors
    /// Returns an error if the path does not exist, is not a regular file,
    /// or cannot be opened for reading
    fn open_input(&self, path: &Path) -> Result<Self::Input>;

    /// Opens the output stream, truncated or freshly created
    ///
    /// # Errors
    /// Returns an error if the path cannot be opened for reading and
    /// writing
    fn open_output(&self, path: &Path) -> Result<Self::Output>;

    /// Number of input bytes when cheaply known, used for progress totals.
    /// `None` means the length is unknown up front.
    fn input_len(&self, path: &Path) -> Result<Option<u64>>;
}
