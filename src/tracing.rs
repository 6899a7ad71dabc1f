use crate::Status;
use tracing::Level;
use tracing_subscriber::{fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt};

pub struct Tracing;

impl Tracing {
    pub fn setup(_name: &str) -> Result<(), Status> {
        match tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::Layer::new()
                    .with_writer(std::io::stdout.with_max_level(Level::INFO)),
            )
            .try_init()
        {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("{e}");
                Err(Status::new("Failed to setup tracing", e))
            }
        }
    }
}
