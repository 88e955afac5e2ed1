use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored sales-price calculation.
///
/// Records are append-only: the id and `created_at` are assigned once by
/// [`CalculationRecord::new`] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: Uuid,
    pub produto: String,
    pub preco_custo: f64,
    pub impostos: f64,
    pub frete: f64,
    pub margem_desejada: f64,
    pub preco_venda: f64,
    pub lucro_bruto: f64,
    pub lucro_liquido: f64,
    pub created_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// Builds a record with a fresh v4 id and the current UTC time.
    ///
    /// The timestamp is cut to microseconds, the precision of `TIMESTAMPTZ`,
    /// so a stored record reads back identical.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        produto: String,
        preco_custo: f64,
        impostos: f64,
        frete: f64,
        margem_desejada: f64,
        preco_venda: f64,
        lucro_bruto: f64,
        lucro_liquido: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            produto,
            preco_custo,
            impostos,
            frete,
            margem_desejada,
            preco_venda,
            lucro_bruto,
            lucro_liquido,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}
