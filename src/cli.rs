use clap::Parser;
use std::path::PathBuf;

use crate::rotation::Direction;

/// Rotate a whole file bitwise by one bit position
#[derive(Parser, Debug)]
#[command(name = "bitspin")]
#[command(version)]
#[command(about = "Rotate a whole file bitwise by one bit position, left or right", long_about = None)]
pub struct Args {
    /// Direction of rotation: left or right
    pub direction: Direction,

    /// File whose bits are rotated
    pub input: PathBuf,

    /// Destination file (created or truncated)
    pub output: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
