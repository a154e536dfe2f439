use anyhow::Result;
use constant_catalog::constants::{CatalogGuard, CatalogMetrics};
use constant_catalog::{config, families};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("constant_catalog=info".parse()?),
        )
        .init();

    info!("Starting constant catalog check");

    // Load configuration from environment
    let config = config::Config::from_env()?;

    // Step 1: Register built-in families
    families::register_builtin();

    // Step 2: Run the guard over everything registered
    let guard = CatalogGuard::new(config.uniqueness).strict(config.strict_translations);
    let report = match guard.check_registered() {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if !report.translation_warnings.is_empty() {
        warn!(
            "{} translation warning(s); set CATALOG_STRICT_TRANSLATIONS=true to make them fatal",
            report.translation_warnings.len()
        );
    }

    // Step 3: Report
    info!("{}", serde_json::to_string_pretty(&report)?);
    info!("Metrics: {}", serde_json::to_string(&CatalogMetrics::global().report())?);

    info!("Catalog check passed");
    Ok(())
}
