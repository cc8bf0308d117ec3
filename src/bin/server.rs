use anyhow::Context;
use trivia_api::configuration::get_configuration;
use trivia_api::db::{ensure_schema, establish_connection};
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let settings = get_configuration().context("Failed to read configuration")?;

    tracing::info!("Opening database at {}", settings.database.path);
    let pool = establish_connection(&settings.database)
        .await
        .context("Cannot connect to DB")?;
    ensure_schema(&pool)
        .await
        .context("Failed to create tables")?;

    run_server(pool, &settings.application).await
}
