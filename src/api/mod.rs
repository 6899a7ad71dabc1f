mod recommender;

pub use recommender::RecommenderApi;
