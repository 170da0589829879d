// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static product catalog.

use std::collections::HashMap;

use maplit::hashmap;

use ecoscan_models::{
    ids::Barcode,
    models::{Category, Product, ProductAttributes},
};

/// Maps barcode digit strings to product records.
///
/// The data is defined at build time and immutable during a session. Barcodes absent from
/// the catalog resolve to a synthetic generic product, never to an error.
pub struct Catalog {
    products: HashMap<&'static str, Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn new() -> Self {
        let products = hashmap! {
            "036000291452" => Product {
                item_id: "12417832".to_string(),
                name: "Head & Shoulders Classic Clean Shampoo".to_string(),
                category: Category::Beauty,
                price: "$4.97".to_string(),
                description: "Anti-dandruff shampoo with zinc pyrithione".to_string(),
                attributes: ProductAttributes {
                    brand: Some("Head & Shoulders".to_string()),
                    material: Some("Synthetic formula".to_string()),
                    packaging: Some("HDPE plastic bottle".to_string()),
                    biodegradable: false,
                    recyclable: true,
                    ..ProductAttributes::default()
                },
            },
            "841351162524" => Product {
                item_id: "23568914".to_string(),
                name: "Gillette Fusion5 Men's Razor".to_string(),
                category: Category::PersonalCare,
                price: "$12.97".to_string(),
                description: "5-blade razor with precision trimmer".to_string(),
                attributes: ProductAttributes {
                    brand: Some("Gillette".to_string()),
                    material: Some("Plastic handle, steel blades".to_string()),
                    packaging: Some("Plastic blister pack".to_string()),
                    lifespan: Some("1-2 months".to_string()),
                    ..ProductAttributes::default()
                },
            },
            "073149042441" => Product {
                item_id: "34679025".to_string(),
                name: "Bounty Select-A-Size Paper Towels".to_string(),
                category: Category::Home,
                price: "$6.98".to_string(),
                description: "2-ply absorbent paper towels".to_string(),
                attributes: ProductAttributes {
                    brand: Some("Bounty".to_string()),
                    material: Some("Virgin paper pulp".to_string()),
                    packaging: Some("Plastic wrap".to_string()),
                    biodegradable: true,
                    post_consumer_waste: Some(0),
                    ..ProductAttributes::default()
                },
            },
            "041785005007" => Product {
                item_id: "45780136".to_string(),
                name: "Scotch-Brite Heavy Duty Scrub Sponge".to_string(),
                category: Category::Home,
                price: "$3.47".to_string(),
                description: "Durable scrubbing sponge for tough cleaning".to_string(),
                attributes: ProductAttributes {
                    brand: Some("Scotch-Brite".to_string()),
                    material: Some("Synthetic fibers and foam".to_string()),
                    packaging: Some("Plastic wrap".to_string()),
                    ..ProductAttributes::default()
                },
            },
            "885909950805" => Product {
                item_id: "56891247".to_string(),
                name: "Conair Cushion Brush with Ball-Tipped Bristles".to_string(),
                category: Category::Beauty,
                price: "$8.97".to_string(),
                description: "Gentle cushion brush for all hair types".to_string(),
                attributes: ProductAttributes {
                    brand: Some("Conair".to_string()),
                    material: Some("Plastic handle, nylon bristles".to_string()),
                    packaging: Some("Cardboard with plastic window".to_string()),
                    recyclable: true,
                    lifespan: Some("2-3 years".to_string()),
                    ..ProductAttributes::default()
                },
            },
            // Legacy short codes from the first catalog version, padded to UPC-A length.
            "000123456789" => Product {
                item_id: "12417832".to_string(),
                name: "Organic Lavender Shampoo".to_string(),
                category: Category::Beauty,
                price: "$9.99".to_string(),
                description: "Natural organic shampoo with lavender essential oil".to_string(),
                attributes: ProductAttributes {
                    brand: Some("EcoClean".to_string()),
                    material: Some("Organic ingredients".to_string()),
                    packaging: Some("Recycled HDPE plastic".to_string()),
                    biodegradable: true,
                    recyclable: true,
                    certifications: vec![
                        "USDA Organic".to_string(),
                        "Leaping Bunny".to_string(),
                    ],
                    ..ProductAttributes::default()
                },
            },
            "000234567890" => Product {
                item_id: "23568914".to_string(),
                name: "Bamboo Hairbrush".to_string(),
                category: Category::Beauty,
                price: "$12.99".to_string(),
                description: "Sustainable bamboo hairbrush with natural bristles".to_string(),
                attributes: ProductAttributes {
                    brand: Some("GreenTools".to_string()),
                    material: Some("Bamboo".to_string()),
                    packaging: Some("Cardboard".to_string()),
                    biodegradable: true,
                    recyclable: true,
                    ..ProductAttributes::default()
                },
            },
            "000345678901" => Product {
                item_id: "34679025".to_string(),
                name: "Recycled Paper Towels".to_string(),
                category: Category::Home,
                price: "$4.99".to_string(),
                description: "100% recycled paper towels".to_string(),
                attributes: ProductAttributes {
                    brand: Some("EcoHome".to_string()),
                    material: Some("Recycled paper".to_string()),
                    packaging: Some("Paper wrapper".to_string()),
                    biodegradable: true,
                    recyclable: true,
                    post_consumer_waste: Some(80),
                    ..ProductAttributes::default()
                },
            },
            "000456789012" => Product {
                item_id: "45780136".to_string(),
                name: "Metal Safety Razor".to_string(),
                category: Category::PersonalCare,
                price: "$19.99".to_string(),
                description: "Durable stainless steel safety razor".to_string(),
                attributes: ProductAttributes {
                    brand: Some("ZeroWaste".to_string()),
                    material: Some("Stainless steel".to_string()),
                    packaging: Some("Metal tin".to_string()),
                    recyclable: true,
                    lifespan: Some("Lifetime".to_string()),
                    ..ProductAttributes::default()
                },
            },
        };
        Self { products }
    }

    /// Finds the product with the given barcode.
    ///
    /// Misses are not errors: a well-formatted but unknown barcode yields the generic product.
    #[must_use]
    pub fn lookup(&self, barcode: &Barcode) -> Product {
        self.products.get(barcode.as_str()).cloned().unwrap_or_else(Self::generic_product)
    }

    /// Constructs the fallback product used for catalog misses.
    #[must_use]
    fn generic_product() -> Product {
        Product {
            item_id: "0".to_string(),
            name: "Generic Product".to_string(),
            category: Category::Miscellaneous,
            price: "$0.00".to_string(),
            description: "Product information not available".to_string(),
            attributes: ProductAttributes {
                material: Some("Unknown".to_string()),
                packaging: Some("Unknown".to_string()),
                ..ProductAttributes::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hit_and_miss() {
        let catalog = Catalog::new();

        let hit = catalog.lookup(&Barcode::try_from("036000291452").expect("valid barcode"));
        assert_eq!(hit.name, "Head & Shoulders Classic Clean Shampoo");

        let miss = catalog.lookup(&Barcode::try_from("999999999999").expect("valid barcode"));
        assert_eq!(miss.name, "Generic Product");
        assert_eq!(miss.category, Category::Miscellaneous);
        assert_eq!(miss.price, "$0.00");
        assert!(!miss.attributes.biodegradable);
        assert!(!miss.attributes.recyclable);
    }
}
