//! SchemaFlow connection probe
//!
//! Opens the configured database, checks that it is the expected product,
//! attaches it to the lifecycle manager and releases it again. Useful to
//! verify credentials and the auto-commit policy before running migrations.

use anyhow::{bail, Context};
use schemaflow_core::config::Settings;
use schemaflow_core::postgres::PgConnection;
use schemaflow_core::{DatabaseConnection, DatabaseKind};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    let settings = Settings::load()?;
    info!("Configuration loaded ({})", settings.database.kind);

    if settings.database.kind != DatabaseKind::Postgres {
        bail!(
            "No driver available for {}; only PostgreSQL is supported",
            settings.database.kind
        );
    }

    let connection = PgConnection::connect(&settings.database.url)
        .context("Failed to open database connection")?;

    let mut database = settings.database.database();
    if !database.is_correct_database_implementation(&connection) {
        warn!(
            "Server reports {} but {} was configured",
            connection.database_product_name(),
            database.kind()
        );
    }

    database
        .set_connection(Box::new(connection))
        .context("Failed to attach connection")?;
    info!(
        "Attached with auto-commit {} (adjusted: {})",
        database.auto_commit_mode(),
        database.is_auto_commit_adjusted()
    );

    database.close().context("Failed to release connection")?;
    info!("Probe finished");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,schemaflow_core=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}
