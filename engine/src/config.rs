// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use clap::Parser;

use ecoscan_models::models::ScanAction;

use crate::{commands, errors::ConfigCheckError, utils};

/// Configuration for `ScanRunner`.
#[must_use]
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Path to the profile file.
    pub profile: PathBuf,

    /// Raw barcode input.
    pub barcode: String,

    /// How the event is recorded.
    pub action: ScanAction,

    /// Reject barcodes failing the check digit test.
    pub enforce_checksum: bool,
}

impl ScanConfig {
    pub fn new(args: &commands::ScanArgs, action: ScanAction) -> Self {
        Self {
            profile: PathBuf::from(&args.profile),
            barcode: args.barcode.clone(),
            action,
            enforce_checksum: args.checksum,
        }
    }

    /// Checks validity of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the profile path exists but is not a file, or its parent is not
    /// a directory.
    pub fn check(&self) -> Result<(), ConfigCheckError> {
        utils::file_exists_or_creatable(&self.profile)?;
        Ok(())
    }
}

/// Configuration for `StatsRunner` and `AchievementsRunner`.
#[must_use]
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Path to the profile file.
    pub profile: PathBuf,
}

impl ReportConfig {
    pub fn new_stats(args: &commands::StatsArgs) -> Self {
        Self { profile: PathBuf::from(&args.profile) }
    }

    pub fn new_achievements(args: &commands::AchievementsArgs) -> Self {
        Self { profile: PathBuf::from(&args.profile) }
    }

    /// Checks validity of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the profile path exists but is not a file, or its parent is not
    /// a directory.
    pub fn check(&self) -> Result<(), ConfigCheckError> {
        utils::file_exists_or_creatable(&self.profile)?;
        Ok(())
    }
}

/// Configuration for `HistoryRunner`.
#[must_use]
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Path to the profile file.
    pub profile: PathBuf,

    /// Maximal number of entries to show.
    pub limit: usize,
}

impl HistoryConfig {
    pub fn new(args: &commands::HistoryArgs) -> Self {
        Self { profile: PathBuf::from(&args.profile), limit: args.limit }
    }

    /// Checks validity of the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the profile path exists but is not a file, or its parent is not
    /// a directory.
    pub fn check(&self) -> Result<(), ConfigCheckError> {
        utils::file_exists_or_creatable(&self.profile)?;
        Ok(())
    }
}

/// Configuration for the program.
#[must_use]
#[derive(Debug, Clone)]
pub enum Config {
    Scan(ScanConfig),
    Stats(ReportConfig),
    History(HistoryConfig),
    Achievements(ReportConfig),
}

impl Config {
    /// Constructs a new config from `Args::parse()`.
    pub fn new_from_args() -> Config {
        use commands::{Args, Commands};

        let args = Args::parse();
        match args.command {
            Commands::Scan(args) => {
                Config::Scan(ScanConfig::new(&args, ScanAction::Scanned))
            }
            Commands::Purchase(args) => {
                Config::Scan(ScanConfig::new(&args, ScanAction::Purchased))
            }
            Commands::Recycle(args) => {
                Config::Scan(ScanConfig::new(&args, ScanAction::Recycled))
            }
            Commands::Stats(args) => Config::Stats(ReportConfig::new_stats(&args)),
            Commands::History(args) => Config::History(HistoryConfig::new(&args)),
            Commands::Achievements(args) => {
                Config::Achievements(ReportConfig::new_achievements(&args))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use ecoscan_models::models::ScanAction;

    use super::{HistoryConfig, ReportConfig, ScanConfig};
    use crate::commands;

    #[test]
    fn configs_built_from_args() {
        let scan = ScanConfig::new(
            &commands::ScanArgs {
                barcode: "036000291452".to_string(),
                profile: "stats.json".to_string(),
                checksum: true,
            },
            ScanAction::Purchased,
        );
        assert_eq!(scan.profile, Path::new("stats.json"));
        assert_eq!(scan.action, ScanAction::Purchased);
        assert!(scan.enforce_checksum);

        let stats = ReportConfig::new_stats(&commands::StatsArgs {
            profile: "stats.json".to_string(),
        });
        assert_eq!(stats.profile, Path::new("stats.json"));

        let achievements = ReportConfig::new_achievements(&commands::AchievementsArgs {
            profile: "stats.json".to_string(),
        });
        assert_eq!(achievements.profile, Path::new("stats.json"));

        let history = HistoryConfig::new(&commands::HistoryArgs {
            profile: "stats.json".to_string(),
            limit: 5,
        });
        assert_eq!(history.profile, Path::new("stats.json"));
        assert_eq!(history.limit, 5);
    }
}
