pub mod models;

pub use models::calculation::CalculationRecord;
pub use models::catalog::{Niche, Supplier, Trend};
