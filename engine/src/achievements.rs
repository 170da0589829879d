// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The achievement engine.
//!
//! Achievements unlock when a statistic crosses a fixed threshold. Once unlocked they
//! stay unlocked even if the statistic later drops below the threshold.

use ecoscan_models::models::UserStats;

/// A single achievement definition.
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub points_reward: u64,
    requirement: fn(&UserStats) -> bool,
    metric: fn(&UserStats) -> f64,
    threshold: f64,
}

/// Result of one evaluation pass.
pub struct Evaluation {
    /// All unlocked IDs, previously held ones first, newly unlocked appended in
    /// definition order.
    pub unlocked_ids: Vec<String>,

    /// Sum of the rewards of the newly unlocked achievements.
    pub bonus_points: u64,

    pub newly_unlocked: Vec<&'static Achievement>,
}

/// Progress of one achievement towards its threshold.
pub struct AchievementStatus {
    pub achievement: &'static Achievement,

    /// Percentage in the 0 to 100 range. Always 100 for unlocked achievements.
    pub progress: f64,

    pub unlocked: bool,
}

#[allow(clippy::cast_precision_loss)]
static ACHIEVEMENTS: [Achievement; 6] = [
    Achievement {
        id: "first_scan",
        name: "First Scanner",
        description: "Scanned your first product",
        icon: "\u{1f3af}",
        points_reward: 50,
        requirement: |stats| stats.items_scanned >= 1,
        metric: |stats| f64::from(stats.items_scanned),
        threshold: 1.0,
    },
    Achievement {
        id: "eco_warrior",
        name: "Eco Warrior",
        description: "Earned 1000 EcoPoints",
        icon: "\u{26a1}",
        points_reward: 100,
        requirement: |stats| stats.eco_points >= 1000,
        metric: |stats| stats.eco_points as f64,
        threshold: 1000.0,
    },
    Achievement {
        id: "carbon_saver",
        name: "Carbon Saver",
        description: "Saved 5kg of CO\u{2082}",
        icon: "\u{1f331}",
        points_reward: 150,
        requirement: |stats| stats.carbon_saved >= 5.0,
        metric: |stats| stats.carbon_saved,
        threshold: 5.0,
    },
    Achievement {
        id: "recycling_champion",
        name: "Recycling Champion",
        description: "Recycled 10 items",
        icon: "\u{267b}\u{fe0f}",
        points_reward: 200,
        requirement: |stats| stats.items_recycled >= 10,
        metric: |stats| f64::from(stats.items_recycled),
        threshold: 10.0,
    },
    Achievement {
        id: "streak_master",
        name: "Streak Master",
        description: "7-day sustainable shopping streak",
        icon: "\u{1f525}",
        points_reward: 300,
        requirement: |stats| stats.streak >= 7,
        metric: |stats| f64::from(stats.streak),
        threshold: 7.0,
    },
    Achievement {
        id: "scanner_pro",
        name: "Scanner Pro",
        description: "Scanned 50 products",
        icon: "\u{1f4f1}",
        points_reward: 250,
        requirement: |stats| stats.items_scanned >= 50,
        metric: |stats| f64::from(stats.items_scanned),
        threshold: 50.0,
    },
];

/// Returns all achievement definitions in display order.
#[must_use]
pub fn all() -> &'static [Achievement] {
    &ACHIEVEMENTS
}

/// Evaluates which achievements unlock given the current statistics.
///
/// Already held IDs are never re-awarded, so running the evaluation twice on the same
/// statistics yields no additional bonus.
#[must_use]
pub fn evaluate(stats: &UserStats, current: &[String]) -> Evaluation {
    let mut unlocked_ids: Vec<String> = current.to_vec();
    let mut bonus_points = 0;
    let mut newly_unlocked = Vec::new();

    for achievement in &ACHIEVEMENTS {
        let held = current.iter().any(|id| id == achievement.id);
        if !held && (achievement.requirement)(stats) {
            unlocked_ids.push(achievement.id.to_string());
            bonus_points += achievement.points_reward;
            newly_unlocked.push(achievement);
        }
    }

    Evaluation {
        unlocked_ids,
        bonus_points,
        newly_unlocked,
    }
}

/// Reports per-achievement progress towards the thresholds.
#[must_use]
pub fn progress(stats: &UserStats) -> Vec<AchievementStatus> {
    ACHIEVEMENTS
        .iter()
        .map(|achievement| {
            let unlocked = stats.has_achievement(achievement.id);
            let progress = if unlocked {
                100.0
            } else {
                (100.0 * (achievement.metric)(stats) / achievement.threshold).min(100.0)
            };
            AchievementStatus {
                achievement,
                progress,
                unlocked,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ecoscan_models::models::UserStats;
    use pretty_assertions::assert_eq;

    use super::{evaluate, progress};

    #[test]
    fn first_scan_unlocks() {
        let stats = UserStats {
            items_scanned: 1,
            ..UserStats::default()
        };

        let evaluation = evaluate(&stats, &[]);
        assert_eq!(evaluation.unlocked_ids, vec!["first_scan"]);
        assert_eq!(evaluation.bonus_points, 50);
        assert_eq!(evaluation.newly_unlocked.len(), 1);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let stats = UserStats {
            items_scanned: 1,
            ..UserStats::default()
        };

        let first = evaluate(&stats, &[]);
        let second = evaluate(&stats, &first.unlocked_ids);
        assert_eq!(second.unlocked_ids, first.unlocked_ids);
        assert_eq!(second.bonus_points, 0);
        assert!(second.newly_unlocked.is_empty());
    }

    #[test]
    fn unlocked_achievements_stay_unlocked() {
        // Statistics no longer satisfy the requirement, the ID is kept anyway.
        let stats = UserStats {
            streak: 1,
            ..UserStats::default()
        };

        let held = vec!["streak_master".to_string()];
        let evaluation = evaluate(&stats, &held);
        assert!(evaluation.unlocked_ids.contains(&"streak_master".to_string()));
    }

    #[test]
    fn multiple_unlocks_in_one_pass() {
        let stats = UserStats {
            items_scanned: 50,
            eco_points: 1500,
            ..UserStats::default()
        };

        let evaluation = evaluate(&stats, &[]);
        assert_eq!(
            evaluation.unlocked_ids,
            vec!["first_scan", "eco_warrior", "scanner_pro"],
        );
        assert_eq!(evaluation.bonus_points, 400);
    }

    #[test]
    fn progress_caps_at_hundred() {
        let stats = UserStats {
            items_scanned: 25,
            carbon_saved: 12.5,
            ..UserStats::default()
        };

        let statuses = progress(&stats);
        let scanner_pro = statuses
            .iter()
            .find(|status| status.achievement.id == "scanner_pro")
            .expect("scanner_pro is defined");
        assert!((scanner_pro.progress - 50.0).abs() < f64::EPSILON);

        let carbon_saver = statuses
            .iter()
            .find(|status| status.achievement.id == "carbon_saver")
            .expect("carbon_saver is defined");
        assert!((carbon_saver.progress - 100.0).abs() < f64::EPSILON);
    }
}
