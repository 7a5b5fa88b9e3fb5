// Core algorithm exports
pub mod recommender;
pub mod scoring;

pub use recommender::{recommend, Recommender};
pub use scoring::count_matches;
