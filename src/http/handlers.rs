use crate::{
    http::models,
    library::{QueueCache, Session},
    queue::{cursor, Feedback, QueueNavigator},
    traits::{ListInvalidator, StatusSink},
};
use serde_json::json;
use std::{convert::Infallible, sync::Arc};
use tracing::{info, instrument, warn};
use warp::http::StatusCode;

use super::query_logs::*;

#[instrument(level = "trace")]
pub async fn welcome() -> Result<impl warp::Reply, Infallible> {
    info!(
        http_request.request_method = "GET",
        http_request.request_url = "/",
        labels.log_type = "query_logs",
        labels.handler = "welcome",
        "welcome"
    );
    Ok("welcome")
}

#[instrument(level = "trace", skip(cache))]
pub async fn get_queue(
    query: models::QueueQuery,
    cache: Arc<QueueCache>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let event = QueueEvent::new(&query);
    let session = Session::from_claim(&query.steam_id);
    match cache.get(session.steam_id()).await {
        Ok(games) => {
            event.log(games.len());
            Ok(Box::new(warp::reply::json(&*games)))
        }
        Err(status) => {
            event.log_error(status);
            Ok(Box::new(StatusCode::NOT_FOUND))
        }
    }
}

#[instrument(level = "trace", skip(cache))]
pub async fn get_game(
    appid: String,
    query: models::QueueQuery,
    cache: Arc<QueueCache>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let event = QueueEvent::new(&query);
    let session = Session::from_claim(&query.steam_id);
    match cache.get(session.steam_id()).await {
        Ok(games) => {
            event.log(games.len());

            // A missing appid degrades to a view with no game and no
            // neighbors rather than an error.
            let neighbors = cursor::resolve(&games, &appid);
            let view = models::GameView {
                game: games.iter().find(|game| game.appid == appid).cloned(),
                prev_game_id: neighbors.prev,
                next_game_id: neighbors.next,
            };
            Ok(Box::new(warp::reply::json(&view)))
        }
        Err(status) => {
            event.log_error(status);
            Ok(Box::new(StatusCode::NOT_FOUND))
        }
    }
}

#[instrument(level = "trace", skip(sink))]
pub async fn post_status(
    op: models::StatusOp,
    sink: Arc<dyn StatusSink + Send + Sync>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let event = StatusUpdateEvent::new(&op);
    match sink.update_status(&op.appid, op.status, &op.steamid).await {
        Ok(()) => {
            event.log();
            Ok(Box::new(warp::reply::json(&json!({ "success": true }))))
        }
        Err(status) => {
            event.log_error(status);
            Ok(Box::new(warp::reply::with_status(
                warp::reply::json(&json!({ "error": "Failed to update game status" })),
                StatusCode::INTERNAL_SERVER_ERROR,
            )))
        }
    }
}

#[instrument(level = "trace", skip(cache))]
pub async fn post_revalidate(
    query: models::RevalidateQuery,
    cache: Arc<QueueCache>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let path = match &query.path {
        Some(path) => path.clone(),
        None => {
            return Ok(Box::new(warp::reply::with_status(
                warp::reply::json(&json!({ "error": "Path parameter is required" })),
                StatusCode::BAD_REQUEST,
            )))
        }
    };

    let event = RevalidateEvent::new(&path);
    match cache.invalidate(&path).await {
        Ok(()) => {
            event.log();
            Ok(Box::new(warp::reply::json(
                &json!({ "revalidated": true, "path": path }),
            )))
        }
        Err(status) => {
            let msg = status.to_string();
            event.log_error(status);
            Ok(Box::new(warp::reply::with_status(
                warp::reply::json(&json!({ "error": msg })),
                StatusCode::INTERNAL_SERVER_ERROR,
            )))
        }
    }
}

#[instrument(level = "trace", skip(cache, navigator))]
pub async fn post_navigate(
    op: models::NavigateOp,
    cache: Arc<QueueCache>,
    navigator: Arc<QueueNavigator>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let event = NavigateEvent::new(&op);

    // An unavailable list never aborts navigation; the cursor simply has
    // nowhere to move and Finish still lands on the queue root.
    let games = match cache.get(&op.steamid).await {
        Ok(games) => games,
        Err(status) => {
            warn!("queue fetch for '{}' failed: {status}", op.steamid);
            Arc::new(vec![])
        }
    };

    let destination = navigator
        .navigate(
            &games,
            &op.appid,
            Feedback::from_status(op.status),
            &op.steamid,
            op.intent,
        )
        .await;

    event.log(&destination);
    Ok(Box::new(warp::reply::json(
        &json!({ "location": destination.location() }),
    )))
}
