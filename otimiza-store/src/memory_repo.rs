use async_trait::async_trait;
use otimiza_core::repository::{CalculationRepository, RepositoryError};
use otimiza_shared::CalculationRecord;
use tokio::sync::RwLock;

/// Process-local calculation history, used when no database is configured.
///
/// Append-only; contents are lost on restart.
#[derive(Default)]
pub struct InMemoryCalculationRepository {
    records: RwLock<Vec<CalculationRecord>>,
}

impl InMemoryCalculationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CalculationRepository for InMemoryCalculationRepository {
    async fn insert(&self, record: &CalculationRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == record.id) {
            return Err(format!("calculation {} already exists", record.id).into());
        }
        records.push(record.clone());
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<CalculationRecord>, RepositoryError> {
        let records = self.records.read().await;

        // Reverse first so the stable sort keeps later inserts ahead on equal timestamps.
        let mut newest: Vec<CalculationRecord> = records.iter().rev().cloned().collect();
        newest.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        newest.truncate(limit);

        Ok(newest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn record(produto: &str) -> CalculationRecord {
        CalculationRecord::new(produto.to_string(), 50.0, 5.0, 10.0, 20.0, 81.25, 31.25, 16.25)
    }

    #[tokio::test]
    async fn test_recent_returns_newest_first() {
        let repo = InMemoryCalculationRepository::new();
        let r1 = record("R1");
        let r2 = record("R2");

        repo.insert(&r1).await.unwrap();
        repo.insert(&r2).await.unwrap();

        let recent = repo.recent(50).await.unwrap();
        assert_eq!(recent[0].id, r2.id);
        assert_eq!(recent[1].id, r1.id);
    }

    #[tokio::test]
    async fn test_recent_orders_by_timestamp_not_arrival() {
        let repo = InMemoryCalculationRepository::new();
        let mut older = record("older");
        older.created_at = Utc::now() - Duration::hours(1);
        let newer = record("newer");

        repo.insert(&newer).await.unwrap();
        repo.insert(&older).await.unwrap();

        let recent = repo.recent(10).await.unwrap();
        assert_eq!(recent[0].produto, "newer");
        assert_eq!(recent[1].produto, "older");
    }

    #[tokio::test]
    async fn test_recent_is_capped() {
        let repo = InMemoryCalculationRepository::new();
        let base = Utc::now();
        for i in 0..60 {
            let mut r = record(&format!("P{}", i));
            r.created_at = base + Duration::seconds(i);
            repo.insert(&r).await.unwrap();
        }

        let recent = repo.recent(50).await.unwrap();
        assert_eq!(recent.len(), 50);
        assert_eq!(recent.first().unwrap().produto, "P59");
        assert_eq!(recent.last().unwrap().produto, "P10");
        assert_eq!(repo.len().await, 60);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let repo = InMemoryCalculationRepository::new();
        let r = record("Capa");

        repo.insert(&r).await.unwrap();
        assert!(repo.insert(&r).await.is_err());
        assert_eq!(repo.len().await, 1);
    }
}
