// Export modules for library usage
pub mod cli;
pub mod complexity;
pub mod config;
pub mod core;
pub mod effort;
pub mod io;
pub mod pipeline;
pub mod reuse;
pub mod sizing;
pub mod vaf;

// Re-export commonly used types
pub use crate::core::{
    round_money, round_size, CalculationResult, CalculationStatus, ClassifiedFunctionPoint,
    ComplexityLevel, Error, FunctionPoint, FunctionPointType, Result,
};

pub use crate::complexity::{classify, WeightTable};

pub use crate::config::EstimationConfig;

pub use crate::effort::{convert, EffortCost, EffortRates};

pub use crate::io::input::{load_snapshot, parse_snapshot, ProjectSnapshot};
pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};

pub use crate::pipeline::{calculate, calculate_batch, CalculationInput};

pub use crate::reuse::{apply_reuse, recommend_reuse_level, ReuseLevel};

pub use crate::sizing::{aggregate, SizingOutcome};

pub use crate::vaf::{compute_vaf, compute_vaf_or_default, uniform_scores, GscFactor, GscScore};
