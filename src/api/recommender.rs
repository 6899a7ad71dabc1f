use crate::{
    documents::{GameEntry, GameStatus},
    traits::{GameListProvider, StatusSink},
    Status,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Client for the recommender backend that owns ranking and feedback storage.
pub struct RecommenderApi {
    base_url: String,
    client: reqwest::Client,
}

impl RecommenderApi {
    pub fn new(base_url: &str) -> RecommenderApi {
        RecommenderApi {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl GameListProvider for RecommenderApi {
    #[instrument(level = "trace", skip(self))]
    async fn get_recommendations(&self, steam_id: &str) -> Result<Vec<GameEntry>, Status> {
        let uri = format!("{}/recommendations?steam_id={steam_id}", self.base_url);

        let resp = self.client.get(&uri).send().await?;
        let text = resp.text().await?;
        let games = serde_json::from_str::<Vec<GameEntry>>(&text).map_err(|e| {
            let msg = format!(
                "({steam_id}) Parse error: {}\n Recommender response: {}",
                e, &text
            );
            Status::internal(msg)
        })?;
        info! {
            "recommended games: {}", games.len()
        }

        Ok(games)
    }
}

#[async_trait]
impl StatusSink for RecommenderApi {
    #[instrument(level = "trace", skip(self))]
    async fn update_status(
        &self,
        appid: &str,
        status: GameStatus,
        steam_id: &str,
    ) -> Result<(), Status> {
        let uri = format!("{}/games/{appid}/status", self.base_url);

        let resp = self
            .client
            .post(&uri)
            .json(&StatusUpdateRequest {
                status,
                steamid: steam_id.to_owned(),
            })
            .send()
            .await?;

        match resp.status().is_success() {
            true => Ok(()),
            false => Err(Status::internal(format!(
                "({appid}) Status update rejected: {}",
                resp.status()
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
struct StatusUpdateRequest {
    status: GameStatus,
    steamid: String,
}
