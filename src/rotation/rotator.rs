use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};

use super::direction::Direction;
use super::error::{Result, RotationError};

/// Rotates the whole of `input` bitwise by one position into `output`.
///
/// The input is treated as a single big-endian bit string: bit 7 of byte 0
/// comes first, bit 0 of the last byte comes last. A left rotation moves
/// every bit one position toward the front of the file, with the leading
/// bit wrapping around to the tail; a right rotation is the mirror image.
/// Returns the number of bytes written, which always equals the number of
/// bytes read. An empty input produces an empty output.
///
/// Both directions consume the input through a one-byte lookahead window,
/// so auxiliary memory does not depend on the input length. A right
/// rotation additionally rewinds both streams to patch the first output
/// byte once the final input byte is known, which is why the bounds demand
/// seekable streams; a left rotation uses neither `Seek` implementation.
pub fn rotate<R, W>(direction: Direction, input: &mut R, output: &mut W) -> Result<u64>
where
    R: Read + Seek,
    W: Write + Seek,
{
    match direction {
        Direction::Left => rotate_left(input, output),
        Direction::Right => rotate_right(input, output),
    }
}

/// Left rotation: a single forward pass.
///
/// The boundary bit (MSB of the first byte) is known up front, so each
/// output byte can be emitted as soon as its successor has been read.
pub fn rotate_left<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<u64> {
    let mut prev = match next_byte(input)? {
        Some(byte) => byte,
        None => return Ok(0),
    };
    let carry = prev >> 7;
    let mut written = 0u64;

    while let Some(next) = next_byte(input)? {
        emit(output, (prev << 1) | (next >> 7))?;
        written += 1;
        prev = next;
    }

    // The final output byte receives the saved boundary bit as its LSB.
    emit(output, (prev << 1) | carry)?;
    Ok(written + 1)
}

/// Right rotation: placeholder-and-patch over a seekable sink.
///
/// The first output byte depends on the last input byte, which is unknown
/// until the stream is exhausted. A zero placeholder reserves slot 0; once
/// the final byte has been seen, both streams are rewound and the
/// placeholder is overwritten with the carried bit and the re-read first
/// byte. This keeps memory use constant where buffering the whole file
/// would not.
pub fn rotate_right<R, W>(input: &mut R, output: &mut W) -> Result<u64>
where
    R: Read + Seek,
    W: Write + Seek,
{
    let mut prev = match next_byte(input)? {
        Some(byte) => byte,
        None => return Ok(0),
    };
    emit(output, 0x00)?;
    let mut written = 1u64;

    while let Some(next) = next_byte(input)? {
        emit(output, (prev << 7) | (next >> 1))?;
        written += 1;
        prev = next;
    }

    // prev now holds the final input byte; its LSB becomes the MSB of the
    // first output byte.
    let carry = prev << 7;

    input.seek(SeekFrom::Start(0)).map_err(RotationError::Read)?;
    output
        .seek(SeekFrom::Start(0))
        .map_err(RotationError::Write)?;

    let first = next_byte(input)?.ok_or_else(|| {
        RotationError::Read(io::Error::new(
            ErrorKind::UnexpectedEof,
            "input became empty between passes",
        ))
    })?;
    emit(output, carry | (first >> 1))?;

    Ok(written)
}

/// Reads a single byte, distinguishing clean end-of-stream (`None`) from a
/// stream failure. A failure on the very first read is a read error, never
/// an empty input. Interrupted reads are retried per the `std::io`
/// contract.
fn next_byte<R: Read>(reader: &mut R) -> Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(RotationError::Read(e)),
        }
    }
}

fn emit<W: Write>(writer: &mut W, byte: u8) -> Result<()> {
    writer.write_all(&[byte]).map_err(RotationError::Write)
}
