/// Crate-wide Result alias over anyhow::Error.
///
/// Every layer above the rotation core reports failures through this one
/// type, so open, read, and write errors flow to the driver unchanged.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
