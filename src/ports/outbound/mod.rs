/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console).
pub mod progress_reporter;
pub mod stream_provider;

pub use progress_reporter::ProgressReporter;
pub use stream_provider::StreamProvider;
