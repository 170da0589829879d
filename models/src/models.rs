// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! This module contains definitions of the data shared between the engine and the backend.
//!
//! `UserStats` and `ScanHistoryItem` keep the camelCase field names used by the web client
//! so that a persisted profile round-trips with the blob stored by the browser.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximal number of entries kept in the scan history.
pub const SCAN_HISTORY_LIMIT: usize = 100;

/// Product category.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[serde(rename = "Beauty")]
    Beauty,

    #[serde(rename = "Personal Care")]
    PersonalCare,

    #[serde(rename = "Home")]
    Home,

    #[serde(rename = "Grocery")]
    Grocery,

    #[serde(rename = "Kitchen")]
    Kitchen,

    /// Used for products not found in the catalog.
    #[serde(rename = "Miscellaneous")]
    #[default]
    Miscellaneous,
}

/// Sustainability-relevant facts about a product.
///
/// Every field carries a default so that partially described products are accepted. Unknown
/// materials and packagings are scored with the lowest quality by the calculator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductAttributes {
    pub brand: Option<String>,

    /// Main material, e.g. "Bamboo" or "Synthetic formula".
    pub material: Option<String>,

    /// Packaging type, e.g. "Cardboard" or "Plastic blister pack".
    pub packaging: Option<String>,

    pub biodegradable: bool,

    pub recyclable: bool,

    /// Names of held certifications, e.g. "USDA Organic".
    pub certifications: Vec<String>,

    pub carbon_neutral: bool,

    /// Produced locally.
    pub local: bool,

    pub fair_trade: bool,

    /// Expected lifespan, e.g. "2-3 years" or "Lifetime".
    pub lifespan: Option<String>,

    /// Post-consumer recycled content in percents.
    pub post_consumer_waste: Option<u8>,
}

/// A scannable item as described by the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog key.
    pub item_id: String,

    pub name: String,

    pub category: Category,

    pub price: String,

    pub description: String,

    pub attributes: ProductAttributes,
}

/// Carbon footprint label derived from the EcoScore.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarbonFootprint {
    Low,
    Medium,
    High,
}

impl CarbonFootprint {
    /// Maps an EcoScore in [1, 5] to a footprint label.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        if score >= 4 {
            Self::Low
        } else if score >= 3 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl std::fmt::Display for CarbonFootprint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// A product together with the values computed for it during a scan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,

    /// Computed EcoScore in [1, 5].
    pub ecoscore: u8,

    /// "Recyclable" or "Non-recyclable".
    pub packaging: String,

    pub carbon_footprint: CarbonFootprint,

    pub sustainability_tips: Vec<String>,
}

/// A suggested better-scoring product.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub id: String,

    pub name: String,

    pub ecoscore: u8,

    pub price: String,

    /// What this alternative improves over the scanned product.
    pub improvement: String,

    pub attributes: ProductAttributes,
}

/// Result of processing one barcode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub success: bool,

    pub product: ScoredProduct,

    pub alternatives: Vec<Alternative>,

    /// The normalized barcode digits.
    pub barcode: String,

    pub message: String,
}

/// What the user did with the scanned product.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScanAction {
    Scanned,
    Purchased,
    Recycled,
}

impl std::fmt::Display for ScanAction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Scanned => write!(f, "scanned"),
            Self::Purchased => write!(f, "purchased"),
            Self::Recycled => write!(f, "recycled"),
        }
    }
}

/// One entry of the scan history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanHistoryItem {
    pub barcode: String,

    pub product_name: String,

    /// EcoScore at the time of the scan.
    pub ecoscore: u8,

    pub points_earned: u64,

    pub timestamp: DateTime<Utc>,

    pub action: ScanAction,
}

/// The per-user statistics aggregate.
///
/// Mutated exclusively through the progress state transition; all fields default so that
/// profiles written by older versions deserialize cleanly.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub eco_points: u64,

    /// Kilograms of CO2 saved.
    pub carbon_saved: f64,

    pub items_recycled: u32,

    pub items_scanned: u32,

    /// Derived from `eco_points`, never mutated independently.
    pub level: u32,

    /// Consecutive-day scanning streak.
    pub streak: u32,

    pub total_spent: f64,

    /// Number of scans with EcoScore of at least 4.
    pub sustainable_choices: u32,

    pub last_scan_date: Option<DateTime<Utc>>,

    /// IDs of unlocked achievements in unlock order. Grows monotonically.
    pub achievements: Vec<String>,

    /// Newest first, capped at `SCAN_HISTORY_LIMIT` entries.
    pub scan_history: Vec<ScanHistoryItem>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            eco_points: 0,
            carbon_saved: 0.0,
            items_recycled: 0,
            items_scanned: 0,
            level: 1,
            streak: 0,
            total_spent: 0.0,
            sustainable_choices: 0,
            last_scan_date: None,
            achievements: Vec::new(),
            scan_history: Vec::new(),
        }
    }
}

impl UserStats {
    /// Calculates the level corresponding to the given amount of points.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn level_for_points(points: u64) -> u32 {
        (points / 1000) as u32 + 1
    }

    #[must_use]
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a == id)
    }
}
