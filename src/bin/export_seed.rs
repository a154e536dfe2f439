use anyhow::{Context, Result};
use constant_catalog::constants::{Catalog, CatalogGuard};
use constant_catalog::seed::SeedExport;
use constant_catalog::{config, families};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("export=info".parse()?)
                .add_directive("constant_catalog=info".parse()?),
        )
        .init();

    info!("Starting seed export");

    let config = config::Config::from_env()?;
    families::register_builtin();

    // Never export a catalog that fails the guard
    let tokens = Catalog::families();
    CatalogGuard::new(config.uniqueness)
        .strict(config.strict_translations)
        .check(&tokens)
        .context("Refusing to export an inconsistent catalog")?;

    let export = SeedExport::collect(&tokens).context("Failed to collect seed rows")?;
    let manifest = export.write_to_dir(&config.output_dir, config.pretty_json)?;

    info!(
        "✓ Exported {} families to {} ({} translations inserted, {} updated)",
        manifest.families.len(),
        config.output_dir.display(),
        manifest.translations_inserted,
        manifest.translations_updated
    );

    Ok(())
}
