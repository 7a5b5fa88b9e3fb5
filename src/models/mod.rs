// Model exports
pub mod catalog;
pub mod domain;

pub use catalog::{sample_catalog, SAMPLE_PRODUCTS};
pub use domain::{PreferenceSet, Product, Recommendation, TieBreak};
