use crate::ports::outbound::StreamProvider;
use crate::shared::error::BitspinError;
use crate::shared::Result;
use std::fs::{self, File, OpenOptions};
use std::path::Path;

/// FileSystemStreams adapter for opening rotation streams on real files
///
/// The input is opened read-only. The output is opened for reading and
/// writing, truncated or freshly created, because the right-rotation patch
/// phase seeks back to overwrite the first byte in place; an append-only
/// sink could not satisfy that contract.
pub struct FileSystemStreams;

impl FileSystemStreams {
    pub fn new() -> Self {
        Self
    }

    /// Checks before the input is opened:
    /// - the path must exist and be a regular file
    /// - symbolic links are rejected
    fn validate_input(&self, path: &Path) -> Result<()> {
        let metadata = fs::symlink_metadata(path).map_err(|e| BitspinError::InputOpen {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        if metadata.is_symlink() {
            return Err(BitspinError::InputOpen {
                path: path.to_path_buf(),
                details: "Security: the input path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(BitspinError::InputOpen {
                path: path.to_path_buf(),
                details: "Not a regular file".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for FileSystemStreams {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamProvider for FileSystemStreams {
    type Input = File;
    type Output = File;

    fn open_input(&self, path: &Path) -> Result<File> {
        self.validate_input(path)?;

        File::open(path).map_err(|e| {
            BitspinError::InputOpen {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn open_output(&self, path: &Path) -> Result<File> {
        // If the file already exists, check it's not a symlink.
        if let Ok(metadata) = fs::symlink_metadata(path) {
            if metadata.is_symlink() {
                return Err(BitspinError::OutputOpen {
                    path: path.to_path_buf(),
                    details: "Security: the output path is a symbolic link. For security reasons, writing through symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }

        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| {
                BitspinError::OutputOpen {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into()
            })
    }

    fn input_len(&self, path: &Path) -> Result<Option<u64>> {
        Ok(fs::metadata(path).ok().map(|m| m.len()))
    }
}
