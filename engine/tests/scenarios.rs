// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;

use ecoscan_engine::{
    processing,
    progress::{self, ScanEvent},
    Catalog, ProfileStore,
};
use ecoscan_models::models::{CarbonFootprint, ScanAction, UserStats};

#[test]
fn scan_known_plastic_product() {
    let catalog = Catalog::new();
    let result = processing::process_barcode(&catalog, "036000291452").expect("valid barcode");

    assert!(result.success);
    assert_eq!(result.product.product.name, "Head & Shoulders Classic Clean Shampoo");
    assert_eq!(result.product.ecoscore, 2);
    assert_eq!(result.product.carbon_footprint, CarbonFootprint::High);
    assert_eq!(result.product.packaging, "Recyclable");
    assert!(result
        .product
        .sustainability_tips
        .contains(&"We found better alternatives with higher EcoScores - check the suggestions".to_string()));
    assert_eq!(result.alternatives.len(), 2);
    assert_eq!(result.alternatives[0].name, "Shampoo Bar (Package Free)");
}

#[test]
fn scan_unknown_barcode_yields_generic_product() {
    let catalog = Catalog::new();
    let result = processing::process_barcode(&catalog, "999999999999").expect("valid barcode");

    assert!(result.success);
    assert_eq!(result.product.product.name, "Generic Product");
    assert_eq!(result.product.ecoscore, 1);
    assert_eq!(result.message, "Successfully scanned Generic Product! EcoScore: 1/5");
}

#[test]
fn malformed_barcode_rejected_before_lookup() {
    let catalog = Catalog::new();

    assert!(processing::process_barcode(&catalog, "12ab").is_err());
    assert!(processing::process_barcode(&catalog, "03600029145").is_err());
    assert!(processing::process_barcode(&catalog, "").is_err());
}

#[test]
fn first_scan_grants_points_and_achievement() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).single().expect("valid date");
    let event = ScanEvent {
        barcode: "000234567890".to_string(),
        product_name: "Bamboo Hairbrush".to_string(),
        ecoscore: 5,
        action: ScanAction::Scanned,
    };

    let stats = progress::apply_event(&UserStats::default(), &event, now);

    // 10 + 5 * 2 for the scan plus 50 for the first scan achievement.
    assert_eq!(stats.eco_points, 70);
    assert!((stats.carbon_saved - 0.5).abs() < f64::EPSILON);
    assert_eq!(stats.streak, 1);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.achievements, vec!["first_scan"]);
}

#[test]
fn full_scan_cycle_with_persistence() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let store = ProfileStore::new(dir.path().join("profile.json"));
    let catalog = Catalog::new();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).single().expect("valid date");

    let result = processing::process_barcode(&catalog, "000456789012").expect("valid barcode");
    let event = ScanEvent {
        barcode: result.barcode.clone(),
        product_name: result.product.product.name.clone(),
        ecoscore: result.product.ecoscore,
        action: ScanAction::Purchased,
    };

    let updated = progress::apply_event(&store.load(), &event, now);
    store.save(&updated).expect("save succeeds");

    let reloaded = store.load();
    assert_eq!(reloaded, updated);
    assert_eq!(reloaded.scan_history.len(), 1);
    assert_eq!(reloaded.scan_history[0].product_name, "Metal Safety Razor");
    assert_eq!(reloaded.scan_history[0].action, ScanAction::Purchased);
}

#[test]
fn daily_scans_build_a_streak() {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).single().expect("valid date");
    let event = ScanEvent {
        barcode: "000345678901".to_string(),
        product_name: "Recycled Paper Towels".to_string(),
        ecoscore: 5,
        action: ScanAction::Scanned,
    };

    let mut stats = UserStats::default();
    for day in 0..7 {
        stats = progress::apply_event(&stats, &event, start + Duration::days(day));
    }

    assert_eq!(stats.streak, 7);
    assert!(stats.achievements.contains(&"streak_master".to_string()));
}
