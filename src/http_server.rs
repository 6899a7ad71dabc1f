use clap::Parser;
use discovery_backend::{
    api::RecommenderApi, http, library::QueueCache, queue::QueueNavigator, traits::ListInvalidator,
    Status, Tracing,
};
use std::{env, sync::Arc, time::Duration};
use tracing::info;
use warp::{self, Filter};

#[derive(Parser)]
struct Opts {
    /// Port number to use for listening to HTTP requests.
    #[clap(short, long, default_value = "3000")]
    port: u16,

    /// URL of the recommender backend.
    #[clap(long, default_value = "http://localhost:8000")]
    recommender_backend: String,

    /// Seconds a fetched recommendation queue is served from cache before it
    /// expires naturally.
    #[clap(long, default_value = "3600")]
    queue_ttl_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), Status> {
    let opts: Opts = Opts::parse();

    Tracing::setup("discovery-backend")?;

    // Let ENV VAR override flag.
    let port: u16 = match env::var("PORT") {
        Ok(port) => match port.parse::<u16>() {
            Ok(port) => port,
            Err(_) => opts.port,
        },
        Err(_) => opts.port,
    };

    let recommender = Arc::new(RecommenderApi::new(&opts.recommender_backend));
    let cache = Arc::new(QueueCache::new(
        Arc::clone(&recommender) as _,
        Duration::from_secs(opts.queue_ttl_secs),
    ));
    let navigator = Arc::new(QueueNavigator::new(
        Arc::clone(&recommender) as _,
        Arc::clone(&cache) as Arc<dyn ListInvalidator + Send + Sync>,
    ));

    info!("discovery queue backend started");

    warp::serve(
        http::routes::routes(cache, navigator, recommender).with(
            warp::cors()
                .allow_methods(vec!["GET", "POST"])
                .allow_headers(vec!["Content-Type", "Authorization"])
                .allow_any_origin()
                .allow_credentials(true),
        ),
    )
    .run(([0, 0, 0, 0], port))
    .await;

    Ok(())
}
