pub mod calculator;
pub mod pricing;
pub mod repository;

pub use calculator::{CalculatorService, HISTORY_LIMIT};
pub use pricing::{price_breakdown, PriceBreakdown, SalesInput};
pub use repository::{CalculationRepository, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Calculation failed: {0}")]
    CalculationError(String),
    #[error("Persistence failed: {0}")]
    PersistenceError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
