pub mod cursor;
mod feedback;
mod navigator;
mod submitter;

pub use feedback::Feedback;
pub use navigator::{Destination, NavigationIntent, QueueNavigator, QUEUE_PATH};
pub use submitter::submit;
