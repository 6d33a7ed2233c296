pub mod bench;
pub mod error;
pub mod export;
pub mod generators;
pub mod maximum_flow;

pub use error::FlowError;
