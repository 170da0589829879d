// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Persistence of user statistics as a JSON file.

use std::path::{Path, PathBuf};

use ecoscan_models::models::UserStats;

use crate::errors::ProcessingError;

/// Reads and writes the user profile file.
#[derive(Clone, Debug)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the statistics, falling back to defaults.
    ///
    /// A missing file is a normal first run. A file that exists but cannot be parsed is
    /// reported in the log and replaced with defaults on the next save.
    #[must_use]
    pub fn load(&self) -> UserStats {
        if !self.path.exists() {
            return UserStats::default();
        }
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(stats) => stats,
                Err(err) => {
                    log::warn!(
                        "Profile file `{}` is not valid, starting fresh: {err}",
                        self.path.display(),
                    );
                    UserStats::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "Could not read profile file `{}`, starting fresh: {err}",
                    self.path.display(),
                );
                UserStats::default()
            }
        }
    }

    /// Saves the statistics, overwriting the previous contents.
    pub fn save(&self, stats: &UserStats) -> Result<(), ProcessingError> {
        let contents =
            serde_json::to_string_pretty(stats).map_err(ProcessingError::WriteJson)?;
        std::fs::write(&self.path, contents)
            .map_err(|err| ProcessingError::Io(err, self.path.clone()))
    }
}
