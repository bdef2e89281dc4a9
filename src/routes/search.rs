use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use crate::data::SAMPLE_RECORDS;
use crate::models::taxpayer::TaxpayerRecord;
use crate::services::matcher;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// GET /api/razon-social — substring match against the bundled demo
/// dataset. Returns at most 10 records in dataset order; an empty
/// query returns an empty array.
pub async fn search_razon_social(
    Query(params): Query<SearchParams>,
) -> Json<Vec<&'static TaxpayerRecord>> {
    Json(matcher::search_by_name(SAMPLE_RECORDS, &params.q))
}
