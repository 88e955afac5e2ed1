use async_trait::async_trait;
use otimiza_shared::CalculationRecord;

pub type RepositoryError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for the append-only calculation history
#[async_trait]
pub trait CalculationRepository: Send + Sync {
    /// Append one record. Implementations must not overwrite an existing id.
    async fn insert(&self, record: &CalculationRecord) -> Result<(), RepositoryError>;

    /// Newest records first (by `created_at`, then insertion order), at most `limit`.
    async fn recent(&self, limit: usize) -> Result<Vec<CalculationRecord>, RepositoryError>;
}
