use colored::*;
use std::process::ExitCode;
use suite_runner::{cli, models::SETUP_FAILURE_EXIT_CODE};

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostic logs go to stderr; progress output stays on stdout.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    match cli::run().await {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(SETUP_FAILURE_EXIT_CODE)
        }
    }
}
