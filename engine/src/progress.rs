// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User progress updates.
//!
//! All transitions are pure: the previous statistics are never mutated, a new value
//! is returned instead.

use chrono::{DateTime, Utc};

use ecoscan_models::models::{
    ScanAction, ScanHistoryItem, UserStats, SCAN_HISTORY_LIMIT,
};

use crate::achievements;

/// Points awarded for recycling an item, independent of its score.
const RECYCLE_POINTS: u64 = 25;

/// One scan, purchase or recycle event.
pub struct ScanEvent {
    pub barcode: String,
    pub product_name: String,
    pub ecoscore: u8,
    pub action: ScanAction,
}

/// Progress within the current level.
pub struct LevelProgress {
    pub current_level: u32,
    pub next_level: u32,

    /// Percentage of the current level completed, 0 to 100.
    pub progress: f64,

    pub points_to_next: u64,
}

/// Applies one event to the statistics and returns the updated value.
///
/// The caller supplies the event time so transitions stay reproducible. Achievement
/// bonuses earned by the event are folded into the point total before the level is
/// derived from it.
#[must_use]
pub fn apply_event(stats: &UserStats, event: &ScanEvent, now: DateTime<Utc>) -> UserStats {
    let ecoscore = u64::from(event.ecoscore);
    let points_earned = match event.action {
        ScanAction::Scanned => 10 + ecoscore * 2,
        ScanAction::Purchased => 10 * ecoscore,
        ScanAction::Recycled => RECYCLE_POINTS,
    };

    let carbon_saved = f64::from(event.ecoscore) / 5.0 * 0.5;

    let streak = next_streak(stats, now);

    let history_item = ScanHistoryItem {
        barcode: event.barcode.clone(),
        product_name: event.product_name.clone(),
        ecoscore: event.ecoscore,
        points_earned,
        timestamp: now,
        action: event.action,
    };
    let mut scan_history = Vec::with_capacity((stats.scan_history.len() + 1).min(SCAN_HISTORY_LIMIT));
    scan_history.push(history_item);
    scan_history.extend(stats.scan_history.iter().cloned());
    scan_history.truncate(SCAN_HISTORY_LIMIT);

    let mut updated = UserStats {
        eco_points: stats.eco_points + points_earned,
        carbon_saved: stats.carbon_saved + carbon_saved,
        items_scanned: stats.items_scanned
            + u32::from(matches!(event.action, ScanAction::Scanned)),
        items_recycled: stats.items_recycled
            + u32::from(matches!(event.action, ScanAction::Recycled)),
        sustainable_choices: stats.sustainable_choices + u32::from(event.ecoscore >= 4),
        streak,
        last_scan_date: Some(now),
        scan_history,
        ..stats.clone()
    };

    let evaluation = achievements::evaluate(&updated, &stats.achievements);
    updated.achievements = evaluation.unlocked_ids;
    updated.eco_points += evaluation.bonus_points;
    updated.level = UserStats::level_for_points(updated.eco_points);

    updated
}

/// Reports how far the user is into the current level.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn level_progress(stats: &UserStats) -> LevelProgress {
    let points_in_level = stats.eco_points % 1000;
    LevelProgress {
        current_level: stats.level,
        next_level: stats.level + 1,
        progress: points_in_level as f64 / 1000.0 * 100.0,
        points_to_next: 1000 - points_in_level,
    }
}

/// Streaks count consecutive calendar days with at least one event.
fn next_streak(stats: &UserStats, now: DateTime<Utc>) -> u32 {
    match stats.last_scan_date {
        Some(last) => {
            let days = now
                .date_naive()
                .signed_duration_since(last.date_naive())
                .num_days();
            match days {
                0 => stats.streak,
                1 => stats.streak + 1,
                _ => 1,
            }
        }
        None => 1,
    }
}
