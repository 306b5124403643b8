/// RotateResponse - Result data returned by the rotate-file use case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateResponse {
    /// Number of bytes written to the output; always equals the number of
    /// bytes read from the input
    pub bytes_rotated: u64,
}
