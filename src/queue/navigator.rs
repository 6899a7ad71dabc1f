use crate::{
    documents::GameEntry,
    queue::{cursor, submitter, Feedback},
    traits::{ListInvalidator, StatusSink},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, instrument};

/// Location of the queue-list view as seen by the presentation layer.
pub const QUEUE_PATH: &str = "/recommendations";

/// Direction the user picked to leave the current game view.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NavigationIntent {
    Previous,
    Next,
    Finish,
}

/// Where the queue pass continues after leaving a game view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Game(String),
    QueueRoot,
}

impl Destination {
    pub fn location(&self) -> String {
        match self {
            Destination::Game(appid) => format!("{QUEUE_PATH}/{appid}"),
            Destination::QueueRoot => QUEUE_PATH.to_owned(),
        }
    }
}

/// Drives a user's pass over the discovery queue.
///
/// Leaving a game view submits its pending feedback, then moves the cursor.
/// Finishing the pass invalidates the cached queue-list view so the next
/// visit fetches a fresh list.
pub struct QueueNavigator {
    sink: Arc<dyn StatusSink + Send + Sync>,
    invalidator: Arc<dyn ListInvalidator + Send + Sync>,
}

impl QueueNavigator {
    pub fn new(
        sink: Arc<dyn StatusSink + Send + Sync>,
        invalidator: Arc<dyn ListInvalidator + Send + Sync>,
    ) -> QueueNavigator {
        QueueNavigator { sink, invalidator }
    }

    /// Leaves the `current` game view towards `intent`.
    ///
    /// The feedback submission settles strictly before the destination is
    /// produced, so a status update always refers to the game being left.
    /// Submission and invalidation failures are logged and never block the
    /// move.
    #[instrument(level = "trace", skip(self, games, feedback))]
    pub async fn navigate(
        &self,
        games: &[GameEntry],
        current: &str,
        feedback: Feedback,
        steam_id: &str,
        intent: NavigationIntent,
    ) -> Destination {
        if let Err(status) =
            submitter::submit(self.sink.as_ref(), feedback, current, steam_id).await
        {
            error!("status update for '{current}' failed: {status}");
        }

        // Neighbors come from the list snapshot, never from a separately
        // tracked flag. A stale Finish that still has a next neighbor falls
        // back to plain Next semantics.
        let neighbors = cursor::resolve(games, current);
        match intent {
            NavigationIntent::Previous => match neighbors.prev {
                Some(appid) => Destination::Game(appid),
                None => Destination::Game(current.to_owned()),
            },
            NavigationIntent::Next | NavigationIntent::Finish => match neighbors.next {
                Some(appid) => Destination::Game(appid),
                None => match intent {
                    NavigationIntent::Finish => {
                        if let Err(status) = self.invalidator.invalidate(QUEUE_PATH).await {
                            error!("queue invalidation failed: {status}");
                        }
                        Destination::QueueRoot
                    }
                    _ => Destination::Game(current.to_owned()),
                },
            },
        }
    }
}
