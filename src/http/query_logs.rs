use std::time::Instant;

use tracing::{error, info};

use crate::{queue::Destination, Status};

use super::models;

pub struct QueueEvent {
    steam_id: String,
    started: Instant,
}

impl QueueEvent {
    pub fn new(query: &models::QueueQuery) -> Self {
        Self {
            steam_id: query.steam_id.clone(),
            started: Instant::now(),
        }
    }

    pub fn log(self, games: usize) {
        info!(
            http_request.request_method = "GET",
            http_request.request_url = "/recommendations",
            labels.log_type = QUERY_LOGS,
            labels.handler = QUEUE_HANDLER,
            request.steam_id = self.steam_id,
            queue.latency = self.started.elapsed().as_millis() as u64,
            response.games = games,
            "queue for '{}'",
            self.steam_id
        )
    }

    pub fn log_error(self, status: Status) {
        error!(
            http_request.request_method = "GET",
            http_request.request_url = "/recommendations",
            labels.log_type = QUERY_LOGS,
            labels.handler = QUEUE_HANDLER,
            labels.status = status.to_string(),
            request.steam_id = self.steam_id,
            queue.latency = self.started.elapsed().as_millis() as u64,
            "queue for '{}'",
            self.steam_id
        )
    }
}

pub struct StatusUpdateEvent {
    request: models::StatusOp,
    started: Instant,
}

impl StatusUpdateEvent {
    pub fn new(request: &models::StatusOp) -> Self {
        Self {
            request: request.clone(),
            started: Instant::now(),
        }
    }

    pub fn log(self) {
        info!(
            http_request.request_method = "POST",
            http_request.request_url = "/games/status",
            labels.log_type = QUERY_LOGS,
            labels.handler = STATUS_HANDLER,
            request.appid = self.request.appid,
            request.status = self.request.status.as_str(),
            status_update.latency = self.started.elapsed().as_millis() as u64,
            "status '{}'",
            self.request
        )
    }

    pub fn log_error(self, status: Status) {
        error!(
            http_request.request_method = "POST",
            http_request.request_url = "/games/status",
            labels.log_type = QUERY_LOGS,
            labels.handler = STATUS_HANDLER,
            labels.status = status.to_string(),
            request.appid = self.request.appid,
            request.status = self.request.status.as_str(),
            status_update.latency = self.started.elapsed().as_millis() as u64,
            "status '{}'",
            self.request
        )
    }
}

pub struct NavigateEvent {
    request: models::NavigateOp,
    started: Instant,
}

impl NavigateEvent {
    pub fn new(request: &models::NavigateOp) -> Self {
        Self {
            request: request.clone(),
            started: Instant::now(),
        }
    }

    pub fn log(self, destination: &Destination) {
        info!(
            http_request.request_method = "POST",
            http_request.request_url = "/queue/navigate",
            labels.log_type = QUERY_LOGS,
            labels.handler = NAVIGATE_HANDLER,
            request.appid = self.request.appid,
            request.intent = ?self.request.intent,
            navigate.latency = self.started.elapsed().as_millis() as u64,
            response.location = destination.location(),
            "navigate '{}'",
            self.request
        )
    }
}

pub struct RevalidateEvent {
    path: String,
    started: Instant,
}

impl RevalidateEvent {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_owned(),
            started: Instant::now(),
        }
    }

    pub fn log(self) {
        info!(
            http_request.request_method = "POST",
            http_request.request_url = "/revalidate",
            labels.log_type = QUERY_LOGS,
            labels.handler = REVALIDATE_HANDLER,
            request.path = self.path,
            revalidate.latency = self.started.elapsed().as_millis() as u64,
            "revalidate '{}'",
            self.path
        )
    }

    pub fn log_error(self, status: Status) {
        error!(
            http_request.request_method = "POST",
            http_request.request_url = "/revalidate",
            labels.log_type = QUERY_LOGS,
            labels.handler = REVALIDATE_HANDLER,
            labels.status = status.to_string(),
            request.path = self.path,
            revalidate.latency = self.started.elapsed().as_millis() as u64,
            "revalidate '{}'",
            self.path
        )
    }
}

const QUERY_LOGS: &str = "query_logs";
const QUEUE_HANDLER: &str = "queue";
const STATUS_HANDLER: &str = "status_update";
const NAVIGATE_HANDLER: &str = "navigate";
const REVALIDATE_HANDLER: &str = "revalidate";
