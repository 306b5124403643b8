/// Filesystem adapters for opening rotation streams
mod stream_provider;

pub use stream_provider::FileSystemStreams;
