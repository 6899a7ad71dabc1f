use crate::{
    documents::{GameEntry, GameStatus},
    queue::NavigationIntent,
};
use serde::{Deserialize, Serialize};

/// Pass-through status update posted by the presentation layer.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StatusOp {
    pub appid: String,
    pub status: GameStatus,
    pub steamid: String,
}

impl std::fmt::Display for StatusOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.appid, self.status)
    }
}

/// A request to leave the current game view.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NavigateOp {
    pub appid: String,
    pub steamid: String,

    /// Pending verdict for the view being left, if the user picked one.
    #[serde(default)]
    pub status: Option<GameStatus>,

    pub intent: NavigationIntent,
}

impl std::fmt::Display for NavigateOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:?}", self.appid, self.intent)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct QueueQuery {
    pub steam_id: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RevalidateQuery {
    #[serde(default)]
    pub path: Option<String>,
}

/// Payload backing a single game view: the game plus its queue neighbors.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<GameEntry>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_game_id: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_game_id: Option<String>,
}
