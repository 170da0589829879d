// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sustainability tips and alternative product suggestions.

use ecoscan_models::models::{Alternative, Category, Product, ProductAttributes};

/// Builds the list of sustainability tips for a product with the given `EcoScore`.
///
/// Tips are accumulated in a fixed order. The list is never empty: when no rule fires,
/// a generic tip is returned instead.
#[must_use]
pub fn tips_for(product: &Product, ecoscore: u8) -> Vec<String> {
    let mut tips = Vec::new();
    let attributes = &product.attributes;

    let material = attributes.material.as_deref().unwrap_or_default();
    if material.contains("Plastic") || material.contains("Synthetic") {
        tips.push(
            "Consider alternatives with less plastic content to reduce microplastic pollution"
                .to_string(),
        );
    }

    if !attributes.recyclable {
        tips.push(
            "This item cannot be recycled - please dispose properly to avoid contamination"
                .to_string(),
        );
    }

    if attributes.biodegradable {
        tips.push(
            "This product is biodegradable - compost if possible to complete the lifecycle"
                .to_string(),
        );
    }

    if ecoscore < 3 {
        tips.push(
            "We found better alternatives with higher EcoScores - check the suggestions"
                .to_string(),
        );
    } else if ecoscore >= 4 {
        tips.push(
            "Great choice! This product has excellent sustainability credentials".to_string(),
        );
    }

    if attributes
        .packaging
        .as_deref()
        .is_some_and(|packaging| packaging.to_lowercase().contains("plastic"))
    {
        tips.push("Look for brands that offer take-back programs for their packaging".to_string());
    }

    if attributes.lifespan.as_deref() == Some("Lifetime") {
        tips.push(
            "This durable product will last for years, reducing replacement waste".to_string(),
        );
    }

    if tips.is_empty() {
        tips.push(
            "Small changes make a big difference - consider reusable options next time"
                .to_string(),
        );
    }

    tips
}

/// Suggests alternative products with a better environmental profile.
///
/// Matching is keyword based on the product category and name. Unmatched products fall
/// through to a single generic suggestion.
#[must_use]
pub fn alternatives_for(product: &Product) -> Vec<Alternative> {
    let name = product.name.to_lowercase();
    match product.category {
        Category::Beauty if name.contains("shampoo") => shampoo_alternatives(),
        Category::Beauty if name.contains("brush") => brush_alternatives(),
        Category::PersonalCare if name.contains("razor") => razor_alternatives(),
        Category::Home if name.contains("sponge") => sponge_alternatives(),
        Category::Home if name.contains("towel") => towel_alternatives(),
        _ => default_alternatives(),
    }
}

fn shampoo_alternatives() -> Vec<Alternative> {
    vec![
        Alternative {
            id: "alt-shampoo-1".to_string(),
            name: "Shampoo Bar (Package Free)".to_string(),
            ecoscore: 5,
            price: "$7.99".to_string(),
            improvement: "Eliminates plastic bottle entirely".to_string(),
            attributes: ProductAttributes {
                material: Some("Solid formulation".to_string()),
                packaging: Some("None".to_string()),
                biodegradable: true,
                certifications: vec!["Vegan".to_string(), "Cruelty-Free".to_string()],
                ..ProductAttributes::default()
            },
        },
        Alternative {
            id: "alt-shampoo-2".to_string(),
            name: "Refillable Shampoo System".to_string(),
            ecoscore: 4,
            price: "$12.99".to_string(),
            improvement: "Reduces packaging waste by 80%".to_string(),
            attributes: ProductAttributes {
                material: Some("Liquid concentrate".to_string()),
                packaging: Some("Aluminum bottle".to_string()),
                recyclable: true,
                ..ProductAttributes::default()
            },
        },
    ]
}

fn brush_alternatives() -> Vec<Alternative> {
    vec![Alternative {
        id: "alt-brush-1".to_string(),
        name: "100% Biodegradable Hairbrush".to_string(),
        ecoscore: 5,
        price: "$14.99".to_string(),
        improvement: "Fully compostable including bristles".to_string(),
        attributes: ProductAttributes {
            material: Some("Wood and natural bristles".to_string()),
            packaging: Some("None".to_string()),
            biodegradable: true,
            ..ProductAttributes::default()
        },
    }]
}

fn razor_alternatives() -> Vec<Alternative> {
    vec![
        Alternative {
            id: "alt-razor-1".to_string(),
            name: "Compostable Bamboo Razor".to_string(),
            ecoscore: 5,
            price: "$9.99".to_string(),
            improvement: "Fully biodegradable alternative".to_string(),
            attributes: ProductAttributes {
                material: Some("Bamboo with steel blade".to_string()),
                packaging: Some("Compostable cellulose".to_string()),
                biodegradable: true,
                ..ProductAttributes::default()
            },
        },
        Alternative {
            id: "alt-razor-2".to_string(),
            name: "Stainless Steel Safety Razor".to_string(),
            ecoscore: 4,
            price: "$19.99".to_string(),
            improvement: "Lifetime durability, replaceable blades".to_string(),
            attributes: ProductAttributes {
                material: Some("Stainless steel".to_string()),
                packaging: Some("Metal tin".to_string()),
                lifespan: Some("Lifetime".to_string()),
                recyclable: true,
                ..ProductAttributes::default()
            },
        },
    ]
}

fn sponge_alternatives() -> Vec<Alternative> {
    vec![
        Alternative {
            id: "alt-sponge-1".to_string(),
            name: "Plant-Based Loofah Sponge".to_string(),
            ecoscore: 5,
            price: "$4.49".to_string(),
            improvement: "100% natural and compostable".to_string(),
            attributes: ProductAttributes {
                material: Some("Loofah plant".to_string()),
                packaging: Some("None".to_string()),
                biodegradable: true,
                ..ProductAttributes::default()
            },
        },
        Alternative {
            id: "alt-sponge-2".to_string(),
            name: "Reusable Silicone Sponge".to_string(),
            ecoscore: 4,
            price: "$6.99".to_string(),
            improvement: "Lasts years instead of weeks".to_string(),
            attributes: ProductAttributes {
                material: Some("Food-grade silicone".to_string()),
                packaging: Some("Recycled paper".to_string()),
                lifespan: Some("2+ years".to_string()),
                recyclable: true,
                ..ProductAttributes::default()
            },
        },
    ]
}

fn towel_alternatives() -> Vec<Alternative> {
    vec![Alternative {
        id: "alt-towel-1".to_string(),
        name: "Reusable Cloth Towels".to_string(),
        ecoscore: 5,
        price: "$12.99".to_string(),
        improvement: "Washable and reusable hundreds of times".to_string(),
        attributes: ProductAttributes {
            material: Some("Organic cotton".to_string()),
            packaging: Some("None".to_string()),
            lifespan: Some("2+ years".to_string()),
            ..ProductAttributes::default()
        },
    }]
}

fn default_alternatives() -> Vec<Alternative> {
    vec![Alternative {
        id: "alt-default-1".to_string(),
        name: "Eco-Friendly Alternative".to_string(),
        ecoscore: 4,
        price: "$8.99".to_string(),
        improvement: "Better environmental profile".to_string(),
        attributes: ProductAttributes {
            material: Some("Sustainable alternative".to_string()),
            packaging: Some("Eco-friendly".to_string()),
            ..ProductAttributes::default()
        },
    }]
}

#[cfg(test)]
mod tests {
    use ecoscan_models::models::{Category, Product, ProductAttributes};
    use pretty_assertions::assert_eq;

    use super::{alternatives_for, tips_for};

    fn product(name: &str, category: Category, attributes: ProductAttributes) -> Product {
        Product {
            item_id: "0".to_string(),
            name: name.to_string(),
            category,
            price: "$1.00".to_string(),
            description: String::new(),
            attributes,
        }
    }

    #[test]
    fn tips_follow_rule_order() {
        let shampoo = product(
            "Test Shampoo",
            Category::Beauty,
            ProductAttributes {
                material: Some("Synthetic formula".to_string()),
                packaging: Some("HDPE plastic bottle".to_string()),
                recyclable: true,
                ..ProductAttributes::default()
            },
        );

        assert_eq!(
            tips_for(&shampoo, 2),
            vec![
                "Consider alternatives with less plastic content to reduce microplastic pollution",
                "We found better alternatives with higher EcoScores - check the suggestions",
                "Look for brands that offer take-back programs for their packaging",
            ],
        );
    }

    #[test]
    fn tips_never_empty() {
        let plain = product(
            "Plain Product",
            Category::Miscellaneous,
            ProductAttributes {
                recyclable: true,
                ..ProductAttributes::default()
            },
        );

        assert_eq!(
            tips_for(&plain, 3),
            vec!["Small changes make a big difference - consider reusable options next time"],
        );
    }

    #[test]
    fn alternatives_match_keywords() {
        let razor = product("Metal Safety Razor", Category::PersonalCare, ProductAttributes::default());
        let suggestions = alternatives_for(&razor);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].id, "alt-razor-1");

        let other = product("Mystery Item", Category::Grocery, ProductAttributes::default());
        let fallback = alternatives_for(&other);
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].name, "Eco-Friendly Alternative");
    }
}
