use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod browse;
mod config;
mod domain;
mod errors;
mod fetch;
mod responses;
mod router;
mod search;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Read configuration from the environment
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the listings API client
    let app = match App::from_config(&cfg) {
        Ok(app) => app,
        Err(e) => {
            error!("❌ Could not create listings client: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    info!(api = %cfg.api_base, "Starting server at http://{}", cfg.bind_addr);

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.workers);

    // 4️⃣ Serve requests; handler errors become error pages, never a crash
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
