use crate::{library::QueueCache, queue::QueueNavigator, traits::StatusSink};
use std::sync::Arc;
use tracing::warn;
use warp::{self, Filter};

use super::{handlers, models, resources::*};

/// Returns a Filter with all available routes.
pub fn routes(
    cache: Arc<QueueCache>,
    navigator: Arc<QueueNavigator>,
    sink: Arc<dyn StatusSink + Send + Sync>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    home()
        .or(get_queue(Arc::clone(&cache)))
        .or(get_game(Arc::clone(&cache)))
        .or(post_status(sink))
        .or(post_revalidate(Arc::clone(&cache)))
        .or(post_navigate(cache, navigator))
        .or_else(|e| async {
            warn! {"Rejected route: {:?}", e};
            Err(e)
        })
}

/// GET /
fn home() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!().and(warp::get()).and_then(handlers::welcome)
}

/// GET /recommendations?steam_id={steam_id}
fn get_queue(
    cache: Arc<QueueCache>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("recommendations")
        .and(warp::get())
        .and(warp::query::<models::QueueQuery>())
        .and(with_cache(cache))
        .and_then(handlers::get_queue)
}

/// GET /recommendations/{appid}?steam_id={steam_id}
fn get_game(
    cache: Arc<QueueCache>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("recommendations" / String)
        .and(warp::get())
        .and(warp::query::<models::QueueQuery>())
        .and(with_cache(cache))
        .and_then(handlers::get_game)
}

/// POST /games/status
fn post_status(
    sink: Arc<dyn StatusSink + Send + Sync>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("games" / "status")
        .and(warp::post())
        .and(json_body::<models::StatusOp>())
        .and(with_sink(sink))
        .and_then(handlers::post_status)
}

/// POST /revalidate?path={path}
fn post_revalidate(
    cache: Arc<QueueCache>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("revalidate")
        .and(warp::post())
        .and(warp::query::<models::RevalidateQuery>())
        .and(with_cache(cache))
        .and_then(handlers::post_revalidate)
}

/// POST /queue/navigate
fn post_navigate(
    cache: Arc<QueueCache>,
    navigator: Arc<QueueNavigator>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("queue" / "navigate")
        .and(warp::post())
        .and(json_body::<models::NavigateOp>())
        .and(with_cache(cache))
        .and(with_navigator(navigator))
        .and_then(handlers::post_navigate)
}

fn json_body<T: serde::de::DeserializeOwned + Send>(
) -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone {
    warp::body::content_length_limit(16 * 1024).and(warp::body::json())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        documents::{GameEntry, GameStatus},
        traits::{GameListProvider, ListInvalidator},
        Status,
    };
    use async_trait::async_trait;
    use serde_json::json;
    use std::{sync::Mutex, time::Duration};

    #[derive(Default)]
    struct FakeRecommender {
        games: Vec<GameEntry>,
        statuses: Mutex<Vec<(String, GameStatus, String)>>,
    }

    #[async_trait]
    impl GameListProvider for FakeRecommender {
        async fn get_recommendations(&self, _steam_id: &str) -> Result<Vec<GameEntry>, Status> {
            Ok(self.games.clone())
        }
    }

    #[async_trait]
    impl StatusSink for FakeRecommender {
        async fn update_status(
            &self,
            appid: &str,
            status: GameStatus,
            steam_id: &str,
        ) -> Result<(), Status> {
            self.statuses
                .lock()
                .unwrap()
                .push((appid.to_owned(), status, steam_id.to_owned()));
            Ok(())
        }
    }

    fn game(appid: &str) -> GameEntry {
        GameEntry {
            appid: appid.to_owned(),
            ..Default::default()
        }
    }

    fn server(
        recommender: Arc<FakeRecommender>,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let cache = Arc::new(QueueCache::new(
            Arc::clone(&recommender) as _,
            Duration::from_secs(3600),
        ));
        let navigator = Arc::new(QueueNavigator::new(
            Arc::clone(&recommender) as _,
            Arc::clone(&cache) as Arc<dyn ListInvalidator + Send + Sync>,
        ));
        routes(cache, navigator, recommender)
    }

    #[tokio::test]
    async fn get_queue_returns_ordered_list() {
        let recommender = Arc::new(FakeRecommender {
            games: vec![game("10"), game("20"), game("30")],
            ..Default::default()
        });

        let resp = warp::test::request()
            .method("GET")
            .path("/recommendations?steam_id=steamid1")
            .reply(&server(recommender))
            .await;

        assert_eq!(resp.status(), 200);
        let games: Vec<GameEntry> = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(
            games.iter().map(|g| g.appid.as_str()).collect::<Vec<_>>(),
            vec!["10", "20", "30"]
        );
    }

    #[tokio::test]
    async fn get_game_resolves_neighbors() {
        let recommender = Arc::new(FakeRecommender {
            games: vec![game("10"), game("20"), game("30")],
            ..Default::default()
        });

        let resp = warp::test::request()
            .method("GET")
            .path("/recommendations/20?steam_id=steamid1")
            .reply(&server(recommender))
            .await;

        assert_eq!(resp.status(), 200);
        let view: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(view["prevGameId"], "10");
        assert_eq!(view["nextGameId"], "30");
        assert_eq!(view["game"]["appid"], "20");
    }

    #[tokio::test]
    async fn post_status_forwards_to_recommender() {
        let recommender = Arc::new(FakeRecommender::default());

        let resp = warp::test::request()
            .method("POST")
            .path("/games/status")
            .json(&json!({
                "appid": "100",
                "status": "liked",
                "steamid": "steamid1",
            }))
            .reply(&server(Arc::clone(&recommender)))
            .await;

        assert_eq!(resp.status(), 200);
        assert_eq!(
            *recommender.statuses.lock().unwrap(),
            vec![("100".to_owned(), GameStatus::Liked, "steamid1".to_owned())]
        );
    }

    #[tokio::test]
    async fn revalidate_without_path_is_rejected() {
        let recommender = Arc::new(FakeRecommender::default());

        let resp = warp::test::request()
            .method("POST")
            .path("/revalidate")
            .reply(&server(recommender))
            .await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["error"], "Path parameter is required");
    }

    #[tokio::test]
    async fn finish_at_tail_submits_and_returns_to_root() {
        let recommender = Arc::new(FakeRecommender {
            games: vec![game("10"), game("20"), game("30")],
            ..Default::default()
        });

        let resp = warp::test::request()
            .method("POST")
            .path("/queue/navigate")
            .json(&json!({
                "appid": "30",
                "steamid": "steamid1",
                "status": "disliked",
                "intent": "finish",
            }))
            .reply(&server(Arc::clone(&recommender)))
            .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["location"], "/recommendations");
        assert_eq!(
            *recommender.statuses.lock().unwrap(),
            vec![("30".to_owned(), GameStatus::Disliked, "steamid1".to_owned())]
        );
    }

    #[tokio::test]
    async fn navigate_next_without_feedback_skips_submission() {
        let recommender = Arc::new(FakeRecommender {
            games: vec![game("10"), game("20")],
            ..Default::default()
        });

        let resp = warp::test::request()
            .method("POST")
            .path("/queue/navigate")
            .json(&json!({
                "appid": "10",
                "steamid": "steamid1",
                "intent": "next",
            }))
            .reply(&server(Arc::clone(&recommender)))
            .await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["location"], "/recommendations/20");
        assert!(recommender.statuses.lock().unwrap().is_empty());
    }
}
