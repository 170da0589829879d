// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use snafu::Snafu;

/// Errors reported to API clients.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ApiError {
    #[snafu(display("Invalid GTIN format"))]
    InvalidGtin,

    #[snafu(display("GTIN parameter required"))]
    MissingGtin,

    #[snafu(display("Failed to process scan request"))]
    ProxyFailure { source: reqwest::Error },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidGtin | Self::MissingGtin => StatusCode::BAD_REQUEST,
            Self::ProxyFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
