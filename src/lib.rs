//! Product Recommender - tag-matching recommendations for the command line
//!
//! Products carry descriptive tags; customers state preferences. Each product
//! is scored by how many tags it shares with the deduplicated preferences,
//! and products with at least one shared tag are returned best-first.

pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use crate::core::{count_matches, recommend, Recommender};
pub use error::{AppError, AppResult};
pub use input::{normalize_preference, preferences_from_lines, PreferencePrompt};
pub use models::{sample_catalog, PreferenceSet, Product, Recommendation, TieBreak};
pub use output::{render, OutputFormat};
