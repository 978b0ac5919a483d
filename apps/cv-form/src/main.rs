mod config;
mod console;
mod download;
mod errors;
mod form;
mod models;
mod pdf_client;

use std::sync::Arc;

use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::download::FileDownloader;
use crate::form::FormController;
use crate::pdf_client::HttpPdfService;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the console on stdout.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("cv_form={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting CV form v{}", env!("CARGO_PKG_VERSION"));

    let service = HttpPdfService::new(&config.service_url, config.request_timeout)?;
    info!("PDF service endpoint: {}", service.endpoint());

    let downloader = FileDownloader::new(&config.download_dir);
    info!("Downloads go to {}", downloader.dir().display());

    let mut controller = FormController::new(Arc::new(service), Arc::new(downloader));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    console::run(&mut controller, stdin, &mut stdout).await?;

    info!("Session ended");
    Ok(())
}
