// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The scan pipeline: barcode to scored scan result.

use ecoscan_models::{
    ids::{Barcode, ParseBarcodeError},
    models::{CarbonFootprint, ScanResult, ScoredProduct},
};

use crate::{advisors, catalog::Catalog, score};

/// Processes a raw barcode string.
///
/// Validation happens before any catalog access. Whitespace and hyphens are tolerated,
/// anything else fails with a parse error.
pub fn process_barcode(catalog: &Catalog, barcode: &str) -> Result<ScanResult, ParseBarcodeError> {
    let barcode = Barcode::try_from(barcode)?;
    Ok(process(catalog, &barcode))
}

/// Processes a validated barcode. Infallible: catalog misses yield a generic product.
#[must_use]
pub fn process(catalog: &Catalog, barcode: &Barcode) -> ScanResult {
    let product = catalog.lookup(barcode);
    let ecoscore = score::calculate(&product);

    let packaging = if product.attributes.recyclable {
        "Recyclable".to_string()
    } else {
        "Non-recyclable".to_string()
    };
    let carbon_footprint = CarbonFootprint::from_score(ecoscore);
    let sustainability_tips = advisors::tips_for(&product, ecoscore);
    let alternatives = advisors::alternatives_for(&product);

    let message = format!("Successfully scanned {}! EcoScore: {ecoscore}/5", product.name);

    ScanResult {
        success: true,
        product: ScoredProduct {
            product,
            ecoscore,
            packaging,
            carbon_footprint,
            sustainability_tips,
        },
        alternatives,
        barcode: barcode.to_string(),
        message,
    }
}
