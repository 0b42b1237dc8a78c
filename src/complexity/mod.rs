//! Complexity classification and weighting for NESMA function points

pub mod classifier;
pub mod weights;

pub use classifier::classify;
pub use weights::WeightTable;
