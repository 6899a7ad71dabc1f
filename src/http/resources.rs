use crate::{library::QueueCache, queue::QueueNavigator, traits::StatusSink};
use std::{convert::Infallible, sync::Arc};
use warp::{self, Filter};

pub fn with_cache(
    cache: Arc<QueueCache>,
) -> impl Filter<Extract = (Arc<QueueCache>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&cache))
}

pub fn with_navigator(
    navigator: Arc<QueueNavigator>,
) -> impl Filter<Extract = (Arc<QueueNavigator>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&navigator))
}

pub fn with_sink(
    sink: Arc<dyn StatusSink + Send + Sync>,
) -> impl Filter<Extract = (Arc<dyn StatusSink + Send + Sync>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&sink))
}
