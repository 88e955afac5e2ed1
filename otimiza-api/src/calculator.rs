use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use otimiza_core::SalesInput;
use otimiza_shared::CalculationRecord;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/calcular-vendas", post(calcular_vendas))
        .route("/historico-calculos", get(historico_calculos))
}

/// POST /api/calcular-vendas
///
/// Any failure, storage included, is a 400 for this endpoint.
pub async fn calcular_vendas(
    State(state): State<AppState>,
    payload: Result<Json<SalesInput>, JsonRejection>,
) -> Result<Json<CalculationRecord>, AppError> {
    let Json(input) = payload?;

    let record = state
        .calculator
        .compute_and_store(input)
        .await
        .map_err(|e| AppError::ValidationError(format!("Erro no cálculo: {}", e)))?;

    Ok(Json(record))
}

/// GET /api/historico-calculos
pub async fn historico_calculos(
    State(state): State<AppState>,
) -> Result<Json<Vec<CalculationRecord>>, AppError> {
    let records = state
        .calculator
        .list_history()
        .await
        .map_err(|e| AppError::InternalServerError(format!("Erro ao buscar histórico: {}", e)))?;

    Ok(Json(records))
}
