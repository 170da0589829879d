// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::net::SocketAddr;

use clap::Parser;

use tracing_subscriber::prelude::*;

mod errors;
mod models;
mod server;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Port to listen on.
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Origin of the scanning service the proxy forwards to.
    #[arg(long, env = "BACKEND_URL", default_value = "http://localhost:5000")]
    backend_url: String,

    #[arg(short, long)]
    log_path: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    setup_logger(args.log_path.as_ref());
    tracing::info!("Starting EcoScan backend!");

    let state = server::AppState {
        backend_url: args.backend_url,
        client: reqwest::Client::new(),
    };
    let app = server::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await.expect("Bind TCP listener");
    tracing::info!("Listening on {:?}", addr);

    axum::serve(listener, app).await.expect("Serve the API");
}

fn setup_logger(log_path: Option<&String>) {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    let output = tracing_subscriber::fmt::layer();

    if let Some(log_path) = log_path {
        let appender = tracing_appender::rolling::Builder::new()
            .rotation(tracing_appender::rolling::Rotation::MINUTELY)
            .filename_prefix("backend")
            .filename_suffix("log")
            .build(log_path)
            .expect("failed to initialize log file appender");
        let file =
            tracing_subscriber::fmt::layer().with_writer(appender).json().flatten_event(true);

        tracing_subscriber::registry().with(filter).with(output).with(file).init()
    } else {
        tracing_subscriber::registry().with(filter).with(output).init()
    }
}
