/// Data transfer objects for the application layer
pub mod rotate_request;
pub mod rotate_response;

pub use rotate_request::{RotateRequest, RotateRequestBuilder};
pub use rotate_response::RotateResponse;
