pub mod detection;
pub mod envelope;
pub mod handlers;
pub mod pipeline;
