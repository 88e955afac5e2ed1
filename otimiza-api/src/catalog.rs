use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use otimiza_shared::{Niche, Supplier, Trend};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Query Types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CategoriaQuery {
    pub categoria: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FornecedoresQuery {
    pub categoria: Option<String>,
    pub localizacao: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/nichos", get(nichos))
        .route("/fornecedores", get(fornecedores))
        .route("/tendencias", get(tendencias))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/nichos?categoria=
pub async fn nichos(
    State(state): State<AppState>,
    query: Result<Query<CategoriaQuery>, QueryRejection>,
) -> Result<Json<Vec<Niche>>, AppError> {
    let Query(query) = query?;
    Ok(Json(state.catalog.list_niches(query.categoria.as_deref())))
}

/// GET /api/fornecedores?categoria=&localizacao=
pub async fn fornecedores(
    State(state): State<AppState>,
    query: Result<Query<FornecedoresQuery>, QueryRejection>,
) -> Result<Json<Vec<Supplier>>, AppError> {
    let Query(query) = query?;
    Ok(Json(state.catalog.list_suppliers(
        query.categoria.as_deref(),
        query.localizacao.as_deref(),
    )))
}

/// GET /api/tendencias?categoria=
pub async fn tendencias(
    State(state): State<AppState>,
    query: Result<Query<CategoriaQuery>, QueryRejection>,
) -> Result<Json<Vec<Trend>>, AppError> {
    let Query(query) = query?;
    Ok(Json(state.catalog.list_trends(query.categoria.as_deref())))
}
