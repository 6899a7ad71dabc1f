mod queue_cache;
mod session;

pub use queue_cache::QueueCache;
pub use session::Session;
