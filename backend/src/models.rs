// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire types of the HTTP API. Field names are camelCase to match the web client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecoscan_engine::score;

/// Product flags sent by the client for the coarse score calculation.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub is_organic: bool,
    pub has_plastic: bool,
    pub is_local: bool,
    pub base_score: i64,
}

/// Body of `POST /api/eco/calculate`.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EcoScoreRequest {
    pub gtin: String,
    pub product_data: ProductData,
}

/// Per-flag adjustments applied to the base score.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Adjustments {
    pub is_organic: i64,
    pub has_plastic: i64,
    pub is_local: i64,
}

/// The coarse 0 to 100 score with its breakdown.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EcoScore {
    pub base: i64,
    pub adjustments: Adjustments,
    #[serde(rename = "final")]
    pub final_score: i64,
}

impl EcoScore {
    /// Calculates the score breakdown for the given flags.
    #[must_use]
    pub fn calculate(data: &ProductData) -> Self {
        Self {
            base: data.base_score,
            adjustments: Adjustments {
                is_organic: if data.is_organic { score::ORGANIC_ADJUSTMENT } else { 0 },
                has_plastic: if data.has_plastic { score::PLASTIC_ADJUSTMENT } else { 0 },
                is_local: if data.is_local { score::LOCAL_ADJUSTMENT } else { 0 },
            },
            final_score: score::calculate_coarse(
                data.base_score,
                data.is_organic,
                data.has_plastic,
                data.is_local,
            ),
        }
    }

    /// The response served when no calculation was requested, e.g. for cache lookups.
    #[must_use]
    pub fn default_cached() -> Self {
        Self {
            base: 70,
            adjustments: Adjustments { is_organic: 0, has_plastic: 0, is_local: 0 },
            final_score: 70,
        }
    }
}

/// Response of `POST /api/eco/calculate`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EcoScoreResponse {
    pub gtin: String,
    pub eco_score: EcoScore,
    pub timestamp: DateTime<Utc>,
}

/// Response of `GET /api/eco/calculate`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CachedEcoScoreResponse {
    pub gtin: String,
    pub cached: bool,
    pub eco_score: EcoScore,
}

/// Response of `GET /api/health`.
#[derive(Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Response of `GET /api/proxy-scan`.
#[derive(Serialize, Debug, Clone)]
pub struct ProxyInfoResponse {
    pub message: &'static str,
    pub backend: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Adjustments, EcoScore, ProductData};

    #[test]
    fn score_breakdown() {
        let score = EcoScore::calculate(&ProductData {
            is_organic: true,
            has_plastic: true,
            is_local: false,
            base_score: 70,
        });

        assert_eq!(
            score,
            EcoScore {
                base: 70,
                adjustments: Adjustments { is_organic: 15, has_plastic: -20, is_local: 0 },
                final_score: 65,
            },
        );
    }

    #[test]
    fn final_score_is_clamped() {
        let high = EcoScore::calculate(&ProductData {
            is_organic: true,
            has_plastic: false,
            is_local: true,
            base_score: 95,
        });
        assert_eq!(high.final_score, 100);

        let low = EcoScore::calculate(&ProductData {
            is_organic: false,
            has_plastic: true,
            is_local: false,
            base_score: 10,
        });
        assert_eq!(low.final_score, 0);
    }

    #[test]
    fn serde_layout() {
        let score = EcoScore::default_cached();
        let json = serde_json::to_value(&score).expect("serialization succeeds");
        assert_eq!(
            json,
            serde_json::json!({
                "base": 70,
                "adjustments": {"isOrganic": 0, "hasPlastic": 0, "isLocal": 0},
                "final": 70,
            }),
        );
    }
}
