// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Route handlers.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use snafu::ResultExt;
use tower_http::cors::CorsLayer;

use crate::{
    errors::{ApiError, ProxyFailureSnafu},
    models::{
        CachedEcoScoreResponse, EcoScore, EcoScoreRequest, EcoScoreResponse, HealthResponse,
        ProxyInfoResponse,
    },
};

/// Shared state of all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Origin of the scanning service the proxy forwards to.
    pub backend_url: String,

    pub client: reqwest::Client,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/eco/calculate", post(calculate).get(cached_calculate))
        .route("/api/proxy-scan", post(proxy_scan).get(proxy_info))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GTINs accepted by the calculation endpoint are exactly twelve digits.
fn valid_gtin(gtin: &str) -> bool {
    gtin.len() == 12 && gtin.bytes().all(|byte| byte.is_ascii_digit())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn calculate(
    Json(request): Json<EcoScoreRequest>,
) -> Result<Json<EcoScoreResponse>, ApiError> {
    if !valid_gtin(&request.gtin) {
        return Err(ApiError::InvalidGtin);
    }

    let eco_score = EcoScore::calculate(&request.product_data);
    tracing::info!(
        gtin = %request.gtin,
        score = eco_score.final_score,
        "EcoScore calculated",
    );

    Ok(Json(EcoScoreResponse {
        gtin: request.gtin,
        eco_score,
        timestamp: Utc::now(),
    }))
}

#[derive(Deserialize, Debug)]
struct CachedQuery {
    gtin: Option<String>,
}

async fn cached_calculate(
    Query(query): Query<CachedQuery>,
) -> Result<Json<CachedEcoScoreResponse>, ApiError> {
    let gtin = query.gtin.ok_or(ApiError::MissingGtin)?;
    Ok(Json(CachedEcoScoreResponse {
        gtin,
        cached: true,
        eco_score: EcoScore::default_cached(),
    }))
}

/// Forwards the request body to the scanning service and relays its answer.
///
/// The body and content type pass through unchanged in both directions, so multipart
/// uploads work without re-encoding.
async fn proxy_scan(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let mut request = state.client.post(format!("{}/api/scan", state.backend_url));
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        request = request.header(header::CONTENT_TYPE, content_type.as_bytes());
    }

    let upstream = request.body(body).send().await.context(ProxyFailureSnafu)?;
    let status = StatusCode::from_u16(upstream.status().as_u16())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.context(ProxyFailureSnafu)?;

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        if let Ok(value) = HeaderValue::from_bytes(content_type.as_bytes()) {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }
    }
    Ok(response)
}

async fn proxy_info(State(state): State<AppState>) -> Json<ProxyInfoResponse> {
    Json(ProxyInfoResponse {
        message: "Barcode scanning proxy endpoint",
        backend: state.backend_url,
    })
}
