pub mod config;
pub mod error;
pub mod guard;
pub mod statement;
pub mod types;

pub mod balance;
pub mod economic;
pub mod engine;
pub mod financial;
pub mod recommendations;

#[cfg(feature = "diagnostics")]
pub mod diagnostics;

#[cfg(feature = "report")]
pub mod report;

#[cfg(feature = "catalog")]
pub mod catalog;

#[cfg(feature = "time_value")]
pub mod time_value;

pub use config::AnalysisConfig;
pub use engine::{analyze_statements, compute_ratios, RatioResult};
pub use error::RatioEngineError;
pub use statement::{FinancialPeriodInput, OperatingCycle, PeriodFigures};
pub use types::*;

/// Standard result type for all ratio-engine operations
pub type RatioEngineResult<T> = Result<T, RatioEngineError>;
