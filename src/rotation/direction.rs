use std::fmt;
use std::str::FromStr;

/// Direction of a whole-file bit rotation.
///
/// The command line accepts exactly the literal tokens `left` and `right`;
/// anything else (including different casing) is rejected so that scripts
/// cannot silently depend on unspecified spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Every bit moves one position toward the most significant end; the
    /// MSB of the first byte wraps around to the LSB of the last byte.
    Left,
    /// Every bit moves one position toward the least significant end; the
    /// LSB of the last byte wraps around to the MSB of the first byte.
    Right,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(format!(
                "Invalid direction: {}. Please specify 'left' or 'right'",
                s
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}
