//! Seat recommendation engine: seat map synthesis, scoring, adjacency
//! grouping and plain-language justifications.

pub mod layout;
pub mod generator;
pub mod scoring;
pub mod adjacency;
pub mod reason;
pub mod recommender;

pub use generator::SeatMapGenerator;
pub use recommender::SeatRecommender;
