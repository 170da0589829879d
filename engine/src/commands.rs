// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{Parser, Subcommand};

pub const DEFAULT_PROFILE_PATH: &str = "ecoscan-profile.json";

/// Arguments of the `scan`, `purchase` and `recycle` commands.
#[derive(Parser, Debug)]
#[command(
    about = "Process a barcode",
    long_about = "Validate the barcode, score the product and record the event in the profile."
)]
pub struct ScanArgs {
    /// Barcode digits. Whitespace and hyphens are ignored.
    pub barcode: String,

    /// Path to the profile file.
    #[arg(long, default_value = DEFAULT_PROFILE_PATH)]
    pub profile: String,

    /// Reject barcodes with an invalid check digit.
    #[arg(long)]
    pub checksum: bool,
}

/// Arguments of the `stats` command.
#[derive(Parser, Debug)]
#[command(about = "Show profile statistics", long_about = "Show profile statistics")]
pub struct StatsArgs {
    /// Path to the profile file.
    #[arg(long, default_value = DEFAULT_PROFILE_PATH)]
    pub profile: String,
}

/// Arguments of the `history` command.
#[derive(Parser, Debug)]
#[command(about = "Show the scan history", long_about = "Show the scan history, newest first")]
pub struct HistoryArgs {
    /// Path to the profile file.
    #[arg(long, default_value = DEFAULT_PROFILE_PATH)]
    pub profile: String,

    /// Maximal number of entries to show.
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

/// Arguments of the `achievements` command.
#[derive(Parser, Debug)]
#[command(
    about = "Show achievement progress",
    long_about = "Show all achievements with progress towards unlocking them."
)]
pub struct AchievementsArgs {
    /// Path to the profile file.
    #[arg(long, default_value = DEFAULT_PROFILE_PATH)]
    pub profile: String,
}

/// All commands of the program.
#[derive(Subcommand, Debug)]
pub enum Commands {
    Scan(ScanArgs),
    Purchase(ScanArgs),
    Recycle(ScanArgs),
    Stats(StatsArgs),
    History(HistoryArgs),
    Achievements(AchievementsArgs),
}

/// Program arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Commands.
    #[command(subcommand)]
    pub command: Commands,
}
