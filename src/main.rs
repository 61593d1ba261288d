//! i18n-propgen
//!
//! Main application entry point

use anyhow::Context;
use tracing::{error, info};

use i18n_propgen::{
    config::Settings,
    utils::logging,
    PropertiesGenerator,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", i18n_propgen::info());

    let generator = PropertiesGenerator::new(&settings.generator);
    info!(
        source_dir = %generator.source_dir().display(),
        output_dir = %generator.output_dir().display(),
        "Generating bundles"
    );
    let report = match generator.run().await.and_then(|report| report.into_result()) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "Bundle generation failed");
            return Err(e.into());
        }
    };

    info!(
        bundles = report.written.len(),
        keys = report.key_count,
        "Bundle generation complete"
    );
    println!("Files generated to {} folder", generator.output_dir().display());

    Ok(())
}
