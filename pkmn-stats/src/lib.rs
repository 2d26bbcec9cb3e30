//! Core types for the Smogon 6v6 battle statistics dataset.
//!
//! This crate provides:
//! - `record`: one row of the dataset (type, tier, generation and base stats)
//! - `tier`: the twelve competitive tiers and their display order
//! - `stat`: the seven numeric dimensions shown on the parallel-coordinates plot
//! - `dataset`: the immutable, shared table loaded once from CSV

pub mod dataset;
pub mod error;
pub mod record;
pub mod stat;
pub mod tier;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use record::Record;
pub use stat::Stat;
pub use tier::Tier;
