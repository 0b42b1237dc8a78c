pub mod errors;
pub mod rounding;
pub mod types;

pub use errors::{Error, Result};
pub use rounding::{round_money, round_size, MONEY_SCALE, SIZE_SCALE};
pub use types::{
    CalculationResult, CalculationStatus, ClassifiedFunctionPoint, ComplexityLevel, FunctionPoint,
    FunctionPointType,
};
