#![recursion_limit = "256"]

pub mod api;
pub mod documents;
pub mod http;
pub mod library;
pub mod queue;
pub mod traits;

mod status;
pub use status::Status;

mod tracing;
pub use crate::tracing::Tracing;
