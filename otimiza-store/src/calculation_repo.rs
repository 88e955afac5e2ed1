use async_trait::async_trait;
use chrono::{DateTime, Utc};
use otimiza_core::repository::{CalculationRepository, RepositoryError};
use otimiza_shared::CalculationRecord;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PostgresCalculationRepository {
    pool: PgPool,
}

impl PostgresCalculationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CalculationRow {
    id: Uuid,
    produto: String,
    preco_custo: f64,
    impostos: f64,
    frete: f64,
    margem_desejada: f64,
    preco_venda: f64,
    lucro_bruto: f64,
    lucro_liquido: f64,
    created_at: DateTime<Utc>,
}

impl From<CalculationRow> for CalculationRecord {
    fn from(row: CalculationRow) -> Self {
        Self {
            id: row.id,
            produto: row.produto,
            preco_custo: row.preco_custo,
            impostos: row.impostos,
            frete: row.frete,
            margem_desejada: row.margem_desejada,
            preco_venda: row.preco_venda,
            lucro_bruto: row.lucro_bruto,
            lucro_liquido: row.lucro_liquido,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CalculationRepository for PostgresCalculationRepository {
    async fn insert(&self, record: &CalculationRecord) -> Result<(), RepositoryError> {
        // Plain INSERT: a duplicate id fails on the primary key instead of overwriting.
        sqlx::query(
            r#"
            INSERT INTO sales_calculations (id, produto, preco_custo, impostos, frete, margem_desejada, preco_venda, lucro_bruto, lucro_liquido, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(record.id)
        .bind(&record.produto)
        .bind(record.preco_custo)
        .bind(record.impostos)
        .bind(record.frete)
        .bind(record.margem_desejada)
        .bind(record.preco_venda)
        .bind(record.lucro_bruto)
        .bind(record.lucro_liquido)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<CalculationRecord>, RepositoryError> {
        let rows: Vec<CalculationRow> = sqlx::query_as(
            r#"
            SELECT id, produto, preco_custo, impostos, frete, margem_desejada, preco_venda, lucro_bruto, lucro_liquido, created_at
            FROM sales_calculations
            ORDER BY created_at DESC, seq DESC
            LIMIT $1
            "#,
        )
        .bind(i64::try_from(limit)?)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CalculationRecord::from).collect())
    }
}
