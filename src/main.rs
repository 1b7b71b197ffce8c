mod domain;
mod error;
mod fields;
mod repository;
mod store;
mod config;
mod console;
mod router;
mod session;

mod app_system;

#[cfg(test)]
mod mock_framework;

use std::process::ExitCode;
use tracing::{error, info};
use crate::app_system::{setup_tracing, InventorySystem};
use crate::config::DatabaseConfig;
use crate::error::SessionError;
use crate::session::ConsoleSession;

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    let config = DatabaseConfig::from_env();
    info!(url = %config.url, "Starting console inventory");

    let mut session = ConsoleSession::new(console::stdio());

    let system = match InventorySystem::start(&config).await {
        Ok(system) => system,
        Err(e) => {
            if let Err(e) = session.report_error(&SessionError::Startup(e.to_string())).await {
                error!(error = %e, "Failed to write startup error");
            }
            return ExitCode::FAILURE;
        }
    };

    let result = session.run(&system.product_client).await;
    let reported = match &result {
        Ok(outcome) => session.report_outcome(outcome).await,
        Err(e) => session.report_error(e).await,
    };

    // Release the store on every path before exiting.
    if let Err(e) = system.shutdown().await {
        error!(error = %e, "Shutdown failed");
    }

    if let Err(e) = reported {
        error!(error = %e, "Failed to write result");
        return ExitCode::FAILURE;
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
