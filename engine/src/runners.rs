// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entry points for the CLI commands.

use chrono::Utc;

use ecoscan_models::ids::Barcode;

use crate::{
    achievements,
    catalog::Catalog,
    config::{HistoryConfig, ReportConfig, ScanConfig},
    errors::ProcessingError,
    processing,
    profile::ProfileStore,
    progress::{self, ScanEvent},
};

/// Runs the `scan`, `purchase` and `recycle` commands.
pub struct ScanRunner;

impl ScanRunner {
    /// Processes the barcode and records the event in the profile.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the barcode is malformed, the checksum check is requested and
    /// fails, or the profile cannot be written.
    pub fn run(config: &ScanConfig) -> Result<(), ProcessingError> {
        let barcode = Barcode::try_from(config.barcode.as_str())?;
        if config.enforce_checksum && !barcode.checksum_valid() {
            return Err(ProcessingError::Checksum { barcode: barcode.to_string() });
        }

        let store = ProfileStore::new(&config.profile);
        let stats = store.load();

        let catalog = Catalog::new();
        let result = processing::process(&catalog, &barcode);

        let event = ScanEvent {
            barcode: result.barcode.clone(),
            product_name: result.product.product.name.clone(),
            ecoscore: result.product.ecoscore,
            action: config.action,
        };
        let updated = progress::apply_event(&stats, &event, Utc::now());
        store.save(&updated)?;

        println!("{}", result.message);
        println!("Packaging: {}", result.product.packaging);
        println!("Carbon footprint: {}", result.product.carbon_footprint);
        for tip in &result.product.sustainability_tips {
            println!(" - {tip}");
        }
        if !result.alternatives.is_empty() {
            println!("Alternatives:");
            for alternative in &result.alternatives {
                println!(
                    " - {} ({}, EcoScore {}/5): {}",
                    alternative.name, alternative.price, alternative.ecoscore,
                    alternative.improvement,
                );
            }
        }

        let points_earned = updated.eco_points - stats.eco_points;
        println!("Earned {points_earned} points, total {}", updated.eco_points);
        for id in updated.achievements.iter().filter(|id| !stats.has_achievement(id)) {
            log::info!("Achievement unlocked: {id}");
        }

        Ok(())
    }
}

/// Runs the `stats` command.
pub struct StatsRunner;

impl StatsRunner {
    /// Prints a summary of the profile statistics.
    ///
    /// # Errors
    ///
    /// Currently infallible, kept fallible for uniformity with the other runners.
    #[allow(clippy::unnecessary_wraps)]
    pub fn run(config: &ReportConfig) -> Result<(), ProcessingError> {
        let stats = ProfileStore::new(&config.profile).load();
        let level = progress::level_progress(&stats);

        println!("EcoPoints: {}", stats.eco_points);
        println!(
            "Level: {} ({:.0}% towards level {}, {} points to go)",
            level.current_level, level.progress, level.next_level, level.points_to_next,
        );
        println!("Streak: {} days", stats.streak);
        println!("Items scanned: {}", stats.items_scanned);
        println!("Items recycled: {}", stats.items_recycled);
        println!("Sustainable choices: {}", stats.sustainable_choices);
        println!("Carbon saved: {:.2} kg", stats.carbon_saved);
        println!("Achievements: {}", stats.achievements.len());

        Ok(())
    }
}

/// Runs the `history` command.
pub struct HistoryRunner;

impl HistoryRunner {
    /// Prints the newest history entries.
    ///
    /// # Errors
    ///
    /// Currently infallible, kept fallible for uniformity with the other runners.
    #[allow(clippy::unnecessary_wraps)]
    pub fn run(config: &HistoryConfig) -> Result<(), ProcessingError> {
        let stats = ProfileStore::new(&config.profile).load();
        if stats.scan_history.is_empty() {
            println!("No scans recorded yet");
            return Ok(());
        }

        for item in stats.scan_history.iter().take(config.limit) {
            println!(
                "{} {} {} ({}) EcoScore {}/5, {} points",
                item.timestamp.format("%Y-%m-%d %H:%M"),
                item.action,
                item.product_name,
                item.barcode,
                item.ecoscore,
                item.points_earned,
            );
        }

        Ok(())
    }
}

/// Runs the `achievements` command.
pub struct AchievementsRunner;

impl AchievementsRunner {
    /// Prints all achievements with unlock progress.
    ///
    /// # Errors
    ///
    /// Currently infallible, kept fallible for uniformity with the other runners.
    #[allow(clippy::unnecessary_wraps)]
    pub fn run(config: &ReportConfig) -> Result<(), ProcessingError> {
        let stats = ProfileStore::new(&config.profile).load();

        for status in achievements::progress(&stats) {
            let marker = if status.unlocked { "unlocked" } else { "locked" };
            println!(
                "{} {} [{marker}, {:.0}%] {} (+{} points)",
                status.achievement.icon,
                status.achievement.name,
                status.progress,
                status.achievement.description,
                status.achievement.points_reward,
            );
        }

        Ok(())
    }
}
