// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::module_name_repetitions)]

/// Formats duration to a human-readable format.
#[must_use]
fn format_elapsed_time(duration: std::time::Duration) -> String {
    let duration = duration.as_secs();
    let seconds = duration % 60;
    let minutes = (duration / 60) % 60;
    let hours = duration / 3600;
    format!("{hours}h {minutes}m {seconds}s")
}

fn run() -> Result<(), ecoscan_engine::ProcessingError> {
    use ecoscan_engine::Config;
    match Config::new_from_args() {
        Config::Scan(config) => {
            config.check()?;
            log::info!("Processing barcode");
            ecoscan_engine::ScanRunner::run(&config)?;
        }
        Config::Stats(config) => {
            config.check()?;
            ecoscan_engine::StatsRunner::run(&config)?;
        }
        Config::History(config) => {
            config.check()?;
            ecoscan_engine::HistoryRunner::run(&config)?;
        }
        Config::Achievements(config) => {
            config.check()?;
            ecoscan_engine::AchievementsRunner::run(&config)?;
        }
    }
    Ok(())
}

fn main() {
    if let Err(err) = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {: <5}] {}",
                humantime::format_rfc3339_seconds(std::time::SystemTime::now()),
                record.level(),
                message
            ));
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
    {
        println!("Logger error:\n{err}");
        return;
    }

    let start_time = std::time::Instant::now();

    if let Err(err) = run() {
        log::error!("Processing error:\n{err}");
        std::process::exit(1);
    }

    log::info!("Done! Elapsed time: {}", format_elapsed_time(start_time.elapsed()));
}
