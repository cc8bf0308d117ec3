use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use trivia_api::configuration::DatabaseSettings;
use trivia_api::db::{ensure_schema, establish_connection, queries::categories::create_category};
use trivia_api::telemetry::init_tracing;
use trivia_api::transfer::{export_data, import_data};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database path
    db_path: PathBuf,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import categories.csv and questions.csv from a directory
    Import { path: PathBuf },
    /// Export categories.csv and questions.csv into a directory
    Export { path: PathBuf },
    /// Add a single category
    AddCategory { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = DatabaseSettings {
        path: cli.db_path.display().to_string(),
        max_connections: 1,
    };
    let pool = establish_connection(&settings)
        .await
        .context("Cannot connect to DB")?;
    ensure_schema(&pool).await?;

    match cli.command {
        Commands::Export { path } => export_data(&pool, &path).await.context("Cannot export")?,
        Commands::Import { path } => import_data(&pool, &path).await.context("Cannot import")?,
        Commands::AddCategory { name } => {
            let id = create_category(&pool, &name).await?;
            println!("{id}");
        }
    }
    pool.close().await;
    Ok(())
}
