use std::sync::Arc;

use otimiza_shared::CalculationRecord;
use tracing::{debug, info};

use crate::pricing::{price_breakdown, SalesInput};
use crate::repository::CalculationRepository;
use crate::{CoreError, CoreResult};

/// Maximum number of records returned by [`CalculatorService::list_history`].
pub const HISTORY_LIMIT: usize = 50;

/// Prices products and keeps the calculation history.
#[derive(Clone)]
pub struct CalculatorService {
    repo: Arc<dyn CalculationRepository>,
}

impl CalculatorService {
    pub fn new(repo: Arc<dyn CalculationRepository>) -> Self {
        Self { repo }
    }

    /// Computes the sale price for `input` and appends the result to the history.
    ///
    /// Nothing is stored when validation or the computation fails.
    pub async fn compute_and_store(&self, input: SalesInput) -> CoreResult<CalculationRecord> {
        let breakdown = price_breakdown(&input)?;

        let record = CalculationRecord::new(
            input.produto,
            input.preco_custo,
            input.impostos,
            input.frete,
            input.margem_desejada,
            breakdown.preco_venda,
            breakdown.lucro_bruto,
            breakdown.lucro_liquido,
        );

        self.repo
            .insert(&record)
            .await
            .map_err(|e| CoreError::PersistenceError(e.to_string()))?;

        info!(id = %record.id, produto = %record.produto, preco_venda = record.preco_venda, "Calculation stored");
        Ok(record)
    }

    pub async fn list_history(&self) -> CoreResult<Vec<CalculationRecord>> {
        let records = self
            .repo
            .recent(HISTORY_LIMIT)
            .await
            .map_err(|e| CoreError::PersistenceError(e.to_string()))?;

        debug!(count = records.len(), "Loaded calculation history");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepositoryError;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct VecRepository {
        records: Mutex<Vec<CalculationRecord>>,
    }

    #[async_trait]
    impl CalculationRepository for VecRepository {
        async fn insert(&self, record: &CalculationRecord) -> Result<(), RepositoryError> {
            self.records.lock().await.push(record.clone());
            Ok(())
        }

        async fn recent(&self, limit: usize) -> Result<Vec<CalculationRecord>, RepositoryError> {
            Ok(self.records.lock().await.iter().rev().take(limit).cloned().collect())
        }
    }

    struct BrokenRepository;

    #[async_trait]
    impl CalculationRepository for BrokenRepository {
        async fn insert(&self, _record: &CalculationRecord) -> Result<(), RepositoryError> {
            Err("connection refused".into())
        }

        async fn recent(&self, _limit: usize) -> Result<Vec<CalculationRecord>, RepositoryError> {
            Err("connection refused".into())
        }
    }

    fn fone() -> SalesInput {
        SalesInput {
            produto: "Fone Bluetooth".to_string(),
            preco_custo: 50.0,
            impostos: 5.0,
            frete: 10.0,
            margem_desejada: 20.0,
        }
    }

    #[tokio::test]
    async fn test_compute_and_store_persists_record() {
        let repo = Arc::new(VecRepository::default());
        let service = CalculatorService::new(repo.clone());

        let record = service.compute_and_store(fone()).await.unwrap();

        assert_eq!(record.preco_venda, 81.25);
        assert_eq!(record.margem_desejada, 20.0);
        let stored = repo.records.lock().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], record);
    }

    #[tokio::test]
    async fn test_identical_requests_create_distinct_records() {
        let service = CalculatorService::new(Arc::new(VecRepository::default()));

        let first = service.compute_and_store(fone()).await.unwrap();
        let second = service.compute_and_store(fone()).await.unwrap();

        assert_ne!(first.id, second.id);
        let history = service.list_history().await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, second.id);
    }

    #[tokio::test]
    async fn test_invalid_input_stores_nothing() {
        let repo = Arc::new(VecRepository::default());
        let service = CalculatorService::new(repo.clone());

        let mut input = fone();
        input.margem_desejada = 100.0;

        assert!(matches!(
            service.compute_and_store(input).await,
            Err(CoreError::ValidationError(_))
        ));
        assert!(repo.records.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_store_failures_surface_as_persistence_errors() {
        let service = CalculatorService::new(Arc::new(BrokenRepository));

        assert!(matches!(
            service.compute_and_store(fone()).await,
            Err(CoreError::PersistenceError(_))
        ));
        assert!(matches!(service.list_history().await, Err(CoreError::PersistenceError(_))));
    }
}
