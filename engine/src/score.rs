// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `EcoScore` calculation.

use ecoscan_models::models::{Product, ProductAttributes};

/// Weight of the material rating in the weighted sum.
const MATERIAL_WEIGHT: f64 = 0.5;

/// Weight of the packaging rating in the weighted sum.
const PACKAGING_WEIGHT: f64 = 0.2;

/// Rating for materials and packaging strings not present in the tables.
const UNKNOWN_RATING: f64 = 1.0;

/// Additive adjustment for organic products in the coarse score.
pub const ORGANIC_ADJUSTMENT: i64 = 15;

/// Additive adjustment for plastic-containing products in the coarse score.
pub const PLASTIC_ADJUSTMENT: i64 = -20;

/// Additive adjustment for locally made products in the coarse score.
pub const LOCAL_ADJUSTMENT: i64 = 10;

/// Calculates the `EcoScore` of a product on the 1 to 5 scale.
///
/// The score is a weighted sum of the material and packaging ratings plus attribute
/// bonuses, rounded to the nearest integer and clamped to the scale. Passing the same
/// product always yields the same score.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn calculate(product: &Product) -> u8 {
    let attributes = &product.attributes;
    let raw = material_rating(attributes.material.as_deref()) * MATERIAL_WEIGHT
        + packaging_rating(attributes.packaging.as_deref()) * PACKAGING_WEIGHT
        + bonus(attributes);
    (raw.round() as u8).clamp(1, 5)
}

/// Calculates the coarse 0 to 100 score used by the calculation service.
///
/// This scale is independent from the 1 to 5 product scale. The base is adjusted for
/// the organic, plastic and local flags and clamped to the range.
#[must_use]
pub fn calculate_coarse(base: i64, is_organic: bool, has_plastic: bool, is_local: bool) -> i64 {
    let mut score = base;
    if is_organic {
        score += ORGANIC_ADJUSTMENT;
    }
    if has_plastic {
        score += PLASTIC_ADJUSTMENT;
    }
    if is_local {
        score += LOCAL_ADJUSTMENT;
    }
    score.clamp(0, 100)
}

fn material_rating(material: Option<&str>) -> f64 {
    match material {
        Some("Bamboo") => 5.0,
        Some(
            "Glass" | "Stainless steel" | "Organic ingredients" | "Plant-based"
            | "Recycled paper",
        ) => 4.0,
        Some("Recycled plastic") => 3.0,
        Some("HDPE plastic bottle" | "Plastic handle, steel blades" | "Virgin paper pulp") => 2.0,
        Some("Synthetic formula" | "Synthetic fibers and foam") => 1.0,
        _ => UNKNOWN_RATING,
    }
}

fn packaging_rating(packaging: Option<&str>) -> f64 {
    match packaging {
        Some("None" | "Compostable bag" | "Cardboard" | "Paper" | "Paper wrapper") => 5.0,
        Some("Glass jar" | "Recycled cardboard" | "Metal tin") => 4.0,
        Some("Cardboard with plastic window" | "Recycled HDPE plastic") => 3.0,
        Some("HDPE plastic bottle" | "Plastic bottle") => 2.0,
        Some("Plastic packaging" | "Plastic wrap" | "Plastic blister pack") => 1.0,
        _ => UNKNOWN_RATING,
    }
}

#[allow(clippy::cast_precision_loss)]
fn bonus(attributes: &ProductAttributes) -> f64 {
    let mut bonus = 0.0;
    if attributes.biodegradable {
        bonus += 1.5;
    }
    if attributes.recyclable {
        bonus += 1.0;
    }
    bonus += 0.5 * attributes.certifications.len() as f64;
    if attributes.carbon_neutral {
        bonus += 1.0;
    }
    if attributes.local {
        bonus += 0.5;
    }
    if attributes.fair_trade {
        bonus += 0.5;
    }
    if attributes.lifespan.as_deref() == Some("Lifetime") {
        bonus += 1.0;
    }
    if attributes.post_consumer_waste.is_some_and(|waste| waste > 50) {
        bonus += 0.5;
    }
    bonus
}

#[cfg(test)]
mod tests {
    use ecoscan_models::models::{Category, Product, ProductAttributes};
    use pretty_assertions::assert_eq;

    use super::{calculate, calculate_coarse};

    fn product_with(attributes: ProductAttributes) -> Product {
        Product {
            item_id: "0".to_string(),
            name: "Test Product".to_string(),
            category: Category::Miscellaneous,
            price: "$1.00".to_string(),
            description: String::new(),
            attributes,
        }
    }

    #[test]
    fn plastic_product_scores_low() {
        let product = product_with(ProductAttributes {
            material: Some("Synthetic formula".to_string()),
            packaging: Some("HDPE plastic bottle".to_string()),
            recyclable: true,
            ..ProductAttributes::default()
        });

        // 1.0 * 0.5 + 2.0 * 0.2 + 1.0 = 1.9, rounds to 2.
        assert_eq!(calculate(&product), 2);
    }

    #[test]
    fn sustainable_product_scores_high() {
        let product = product_with(ProductAttributes {
            material: Some("Bamboo".to_string()),
            packaging: Some("Cardboard".to_string()),
            biodegradable: true,
            recyclable: true,
            ..ProductAttributes::default()
        });

        // 5.0 * 0.5 + 5.0 * 0.2 + 2.5 = 6.0, clamps to 5.
        assert_eq!(calculate(&product), 5);
    }

    #[test]
    fn unknown_attributes_score_floor() {
        let product = product_with(ProductAttributes::default());

        // 1.0 * 0.5 + 1.0 * 0.2 = 0.7, rounds to 1.
        assert_eq!(calculate(&product), 1);
    }

    #[test]
    fn score_is_deterministic() {
        let product = product_with(ProductAttributes {
            material: Some("Recycled paper".to_string()),
            packaging: Some("Paper".to_string()),
            post_consumer_waste: Some(80),
            ..ProductAttributes::default()
        });

        let first = calculate(&product);
        assert_eq!(calculate(&product), first);
    }

    #[test]
    fn coarse_score_adjustments() {
        assert_eq!(calculate_coarse(70, false, false, false), 70);
        assert_eq!(calculate_coarse(70, true, false, false), 85);
        assert_eq!(calculate_coarse(70, false, true, false), 50);
        assert_eq!(calculate_coarse(70, true, true, true), 75);
    }

    #[test]
    fn coarse_score_clamps() {
        assert_eq!(calculate_coarse(95, true, false, true), 100);
        assert_eq!(calculate_coarse(5, false, true, false), 0);
        assert_eq!(calculate_coarse(150, false, false, false), 100);
        assert_eq!(calculate_coarse(-10, false, false, false), 0);
    }
}
