/// Adapters layer - concrete implementations of ports
pub mod outbound;
