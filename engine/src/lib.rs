// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod achievements;
pub mod advisors;
pub mod catalog;
mod commands;
mod config;
mod errors;
pub mod processing;
pub mod profile;
pub mod progress;
mod runners;
pub mod score;
mod utils;

pub use crate::{
    catalog::Catalog,
    config::Config,
    errors::ProcessingError,
    profile::ProfileStore,
    runners::{AchievementsRunner, HistoryRunner, ScanRunner, StatsRunner},
};
