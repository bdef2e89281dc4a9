use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use garde::Validate;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::models::lookup::{ErrorResponse, RucLookupResponse, RucQuery};
use crate::services::sunat::SunatError;

pub const INVALID_RUC_MESSAGE: &str = "El RUC debe contener exactamente 11 dígitos.";
pub const UPSTREAM_ERROR_MESSAGE: &str =
    "No se pudo obtener información del RUC en este momento.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Error inesperado consultando el RUC.";

#[derive(Debug, Deserialize)]
pub struct RucParams {
    pub ruc: Option<String>,
}

/// Failure taxonomy for the lookup endpoint. Every variant resolves to
/// a structured `{ "error": ... }` body; upstream detail stays in the
/// server logs.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("RUC failed validation")]
    InvalidInput,

    #[error("registry returned HTTP {0}")]
    Upstream(StatusCode),

    #[error("unexpected failure contacting registry")]
    Unexpected,
}

impl LookupError {
    fn status(&self) -> StatusCode {
        match self {
            LookupError::InvalidInput => StatusCode::BAD_REQUEST,
            LookupError::Upstream(status) => *status,
            LookupError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            LookupError::InvalidInput => INVALID_RUC_MESSAGE,
            LookupError::Upstream(_) => UPSTREAM_ERROR_MESSAGE,
            LookupError::Unexpected => UNEXPECTED_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });
        (self.status(), body).into_response()
    }
}

/// GET /api/ruc — validate an 11-digit RUC and proxy the lookup to the
/// upstream registry. No outbound call is made for invalid input.
pub async fn lookup_ruc(
    State(state): State<AppState>,
    Query(params): Query<RucParams>,
) -> Result<Json<RucLookupResponse>, LookupError> {
    metrics::counter!("ruc_lookups_total").increment(1);

    let query = RucQuery {
        ruc: params.ruc.as_deref().unwrap_or("").trim().to_string(),
    };
    if query.validate().is_err() {
        metrics::counter!("ruc_lookups_invalid_total").increment(1);
        return Err(LookupError::InvalidInput);
    }
    let ruc = query.ruc;

    if let Some(cached) = state.cache.get(&ruc).await {
        metrics::counter!("ruc_cache_hits_total").increment(1);
        return Ok(Json(RucLookupResponse::from_upstream(cached)));
    }

    match state.sunat.lookup_ruc(&ruc).await {
        Ok(payload) => {
            state.cache.insert(&ruc, payload.clone()).await;
            Ok(Json(RucLookupResponse::from_upstream(payload)))
        }
        Err(SunatError::Status { status, body }) => {
            tracing::error!(ruc = %ruc, %status, body = %body, "registry lookup failed");
            metrics::counter!("ruc_lookup_upstream_errors_total").increment(1);
            Err(LookupError::Upstream(status))
        }
        Err(err) => {
            tracing::error!(ruc = %ruc, error = %err, "unexpected error during registry lookup");
            metrics::counter!("ruc_lookup_upstream_errors_total").increment(1);
            Err(LookupError::Unexpected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_400() {
        let err = LookupError::InvalidInput;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), INVALID_RUC_MESSAGE);
    }

    #[test]
    fn upstream_error_preserves_status() {
        let err = LookupError::Upstream(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.message(), UPSTREAM_ERROR_MESSAGE);
    }

    #[test]
    fn unexpected_error_maps_to_500() {
        let err = LookupError::Unexpected;
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), UNEXPECTED_ERROR_MESSAGE);
    }
}
