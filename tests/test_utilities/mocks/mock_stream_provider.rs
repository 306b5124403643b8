use bitspin::prelude::*;
use std::io::{self, Cursor, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// In-memory sink shared between a test and the use case under test.
///
/// Clones share the underlying buffer but carry their own position, so a
/// test can hand one clone to the provider and keep another to inspect
/// what was written.
#[derive(Clone, Default)]
pub struct SharedSink {
    data: Arc<Mutex<Vec<u8>>>,
    position: u64,
}

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<u8> {
        self.data.lock().unwrap().clone()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut data = self.data.lock().unwrap();
        let pos = self.position as usize;
        let end = pos + buf.len();
        if end > data.len() {
            data.resize(end, 0);
        }
        data[pos..end].copy_from_slice(buf);
        self.position = end as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for SharedSink {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let data = self.data.lock().unwrap();
        let pos = self.position as usize;
        if pos >= data.len() {
            return Ok(0);
        }
        let n = buf.len().min(data.len() - pos);
        buf[..n].copy_from_slice(&data[pos..pos + n]);
        self.position += n as u64;
        Ok(n)
    }
}

impl Seek for SharedSink {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let len = self.data.lock().unwrap().len() as i64;
        let new_position = match pos {
            SeekFrom::Start(n) => n as i64,
            SeekFrom::End(offset) => len + offset,
            SeekFrom::Current(offset) => self.position as i64 + offset,
        };
        if new_position < 0 {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                "seek before start of sink",
            ));
        }
        self.position = new_position as u64;
        Ok(self.position)
    }
}

/// Mock StreamProvider serving a fixed input buffer and a SharedSink
pub struct MockStreamProvider {
    input: Vec<u8>,
    sink: SharedSink,
    length_known: bool,
}

impl MockStreamProvider {
    pub fn new(input: Vec<u8>) -> Self {
        Self {
            input,
            sink: SharedSink::new(),
            length_known: true,
        }
    }

    /// A provider that pretends the input length cannot be discovered up
    /// front, to exercise the spinner-style progress path.
    pub fn with_unknown_length(input: Vec<u8>) -> Self {
        Self {
            input,
            sink: SharedSink::new(),
            length_known: false,
        }
    }

    /// A handle onto the sink the provider will serve, so the test can
    /// inspect what the use case wrote after it has consumed the provider.
    pub fn sink_handle(&self) -> SharedSink {
        self.sink.clone()
    }
}

impl StreamProvider for MockStreamProvider {
    type Input = Cursor<Vec<u8>>;
    type Output = SharedSink;

    fn open_input(&self, _path: &Path) -> Result<Self::Input> {
        Ok(Cursor::new(self.input.clone()))
    }

    fn open_output(&self, _path: &Path) -> Result<Self::Output> {
        // create + truncate semantics
        self.sink.data.lock().unwrap().clear();
        Ok(self.sink.clone())
    }

    fn input_len(&self, _path: &Path) -> Result<Option<u64>> {
        if self.length_known {
            Ok(Some(self.input.len() as u64))
        } else {
            Ok(None)
        }
    }
}

/// Which open call a FailingStreamProvider refuses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    InputOpen,
    OutputOpen,
}

/// Mock StreamProvider whose configured open call fails
pub struct FailingStreamProvider {
    fail_on: FailurePoint,
}

impl FailingStreamProvider {
    pub fn new(fail_on: FailurePoint) -> Self {
        Self { fail_on }
    }
}

impl StreamProvider for FailingStreamProvider {
    type Input = Cursor<Vec<u8>>;
    type Output = SharedSink;

    fn open_input(&self, path: &Path) -> Result<Self::Input> {
        if self.fail_on == FailurePoint::InputOpen {
            return Err(BitspinError::InputOpen {
                path: path.to_path_buf(),
                details: "injected open failure".to_string(),
            }
            .into());
        }
        Ok(Cursor::new(vec![0x01]))
    }

    fn open_output(&self, path: &Path) -> Result<Self::Output> {
        if self.fail_on == FailurePoint::OutputOpen {
            return Err(BitspinError::OutputOpen {
                path: path.to_path_buf(),
                details: "injected open failure".to_string(),
            }
            .into());
        }
        Ok(SharedSink::new())
    }

    fn input_len(&self, _path: &Path) -> Result<Option<u64>> {
        Ok(None)
    }
}

/// Input stream that fails on the first read
pub struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(ErrorKind::Other, "injected read failure"))
    }
}

impl Seek for BrokenReader {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Ok(0)
    }
}

/// Mock StreamProvider whose input stream fails as soon as it is read
pub struct BrokenInputProvider;

impl StreamProvider for BrokenInputProvider {
    type Input = BrokenReader;
    type Output = SharedSink;

    fn open_input(&self, _path: &Path) -> Result<Self::Input> {
        Ok(BrokenReader)
    }

    fn open_output(&self, _path: &Path) -> Result<Self::Output> {
        Ok(SharedSink::new())
    }

    fn input_len(&self, _path: &Path) -> Result<Option<u64>> {
        Ok(None)
    }
}
