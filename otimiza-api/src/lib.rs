use axum::{
    extract::OriginalUri,
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod calculator;
pub mod catalog;
pub mod error;
pub mod health;
pub mod state;

pub use error::AppError;
pub use state::AppState;

/// Builds the full router; every endpoint lives under `/api`.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .merge(calculator::routes())
        .merge(catalog::routes())
        .merge(health::routes());

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `"*"` anywhere in `origins` allows any origin without credentials;
/// otherwise only the listed origins are allowed, with credentials.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.is_empty() || origins.iter().any(|o| o.trim() == "*") {
        return Ok(cors.allow_origin(Any));
    }

    let origins = origins
        .iter()
        .map(|o| HeaderValue::from_str(o.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(cors
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true))
}

async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFoundError(format!("Rota não encontrada: {}", uri.path()))
}
