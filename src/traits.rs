use crate::{
    documents::{GameEntry, GameStatus},
    Status,
};
use async_trait::async_trait;

/// Source of a user's ordered recommendation list.
#[async_trait]
pub trait GameListProvider {
    async fn get_recommendations(&self, steam_id: &str) -> Result<Vec<GameEntry>, Status>;
}

/// Outbound sink for a user's verdict on a recommended game.
#[async_trait]
pub trait StatusSink {
    async fn update_status(
        &self,
        appid: &str,
        status: GameStatus,
        steam_id: &str,
    ) -> Result<(), Status>;
}

/// Invalidates a cached view so its next fetch hits the backend.
#[async_trait]
pub trait ListInvalidator {
    async fn invalidate(&self, path: &str) -> Result<(), Status>;
}
