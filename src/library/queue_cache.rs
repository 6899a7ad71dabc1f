use crate::{
    documents::GameEntry,
    queue::QUEUE_PATH,
    traits::{GameListProvider, ListInvalidator},
    Status,
};
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;
use tracing::{info, instrument};

/// Serves each user's recommendation list from a TTL cache.
///
/// The recommender may reorder on every fetch; a cached snapshot keeps one
/// queue pass stable until it expires or the queue-list view is explicitly
/// invalidated at the end of a pass.
pub struct QueueCache {
    provider: Arc<dyn GameListProvider + Send + Sync>,
    ttl: Duration,
    queues: RwLock<HashMap<String, CachedQueue>>,
}

struct CachedQueue {
    games: Arc<Vec<GameEntry>>,
    fetched: Instant,
}

impl QueueCache {
    pub fn new(provider: Arc<dyn GameListProvider + Send + Sync>, ttl: Duration) -> QueueCache {
        QueueCache {
            provider,
            ttl,
            queues: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the user's ordered queue, fetching from the recommender only
    /// when there is no live snapshot.
    #[instrument(level = "trace", skip(self))]
    pub async fn get(&self, steam_id: &str) -> Result<Arc<Vec<GameEntry>>, Status> {
        {
            let queues = self.queues.read().await;
            if let Some(cached) = queues.get(steam_id) {
                if cached.fetched.elapsed() < self.ttl {
                    return Ok(Arc::clone(&cached.games));
                }
            }
        }

        let games = Arc::new(self.provider.get_recommendations(steam_id).await?);
        let mut queues = self.queues.write().await;
        queues.insert(
            steam_id.to_owned(),
            CachedQueue {
                games: Arc::clone(&games),
                fetched: Instant::now(),
            },
        );
        Ok(games)
    }
}

#[async_trait]
impl ListInvalidator for QueueCache {
    /// Drops every cached snapshot of the queue-list view. The next `get`
    /// per user reflects the recommender's latest state.
    #[instrument(level = "trace", skip(self))]
    async fn invalidate(&self, path: &str) -> Result<(), Status> {
        if path != QUEUE_PATH {
            return Err(Status::invalid_argument(format!(
                "'{path}' is not a cached view"
            )));
        }

        let mut queues = self.queues.write().await;
        let evicted = queues.len();
        queues.clear();
        info! {
            "evicted {evicted} cached queues"
        }
        Ok(())
    }
}
