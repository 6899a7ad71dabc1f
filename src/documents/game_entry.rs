use serde::{Deserialize, Serialize};

/// A recommended game as served by the recommender backend.
///
/// Only `appid` matters to the queue protocol; the remaining fields are
/// display data passed through to the presentation layer. Field names on the
/// wire are camelCase to match the recommender's JSON.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GameEntry {
    pub appid: String,
    pub name: String,

    #[serde(default)]
    pub release_date: String,

    #[serde(default)]
    pub detailed_description: String,

    #[serde(default)]
    pub short_description: String,

    #[serde(default)]
    pub header_image: String,

    #[serde(default)]
    pub developer: String,

    #[serde(default)]
    pub publisher: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub recommendation_score: f64,
}

/// User verdict on a recommended game, as carried on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Liked,
    Disliked,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Liked => "liked",
            GameStatus::Disliked => "disliked",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_entry_wire_names_are_camel_case() {
        let entry = GameEntry {
            appid: "620".to_owned(),
            name: "Portal 2".to_owned(),
            release_date: "Apr 18, 2011".to_owned(),
            header_image: "https://example.com/620.jpg".to_owned(),
            recommendation_score: 97.3,
            ..Default::default()
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["appid"], "620");
        assert_eq!(json["releaseDate"], "Apr 18, 2011");
        assert_eq!(json["headerImage"], "https://example.com/620.jpg");
        assert_eq!(json["recommendationScore"], 97.3);
    }

    #[test]
    fn game_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&GameStatus::Liked).unwrap(),
            r#""liked""#
        );
        assert_eq!(
            serde_json::to_string(&GameStatus::Disliked).unwrap(),
            r#""disliked""#
        );
    }
}
