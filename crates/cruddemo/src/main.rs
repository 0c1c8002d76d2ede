mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use database::{InstructorDao, config::database_url, db::create_connection};
use log::info;
use migration::{Migrator, MigratorTrait};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads DATABASE_URL from the environment
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let url = database_url(cli.database_url)?;

    let db = create_connection(&url)
        .await
        .context("failed to connect to the database")?;
    Migrator::up(&db, None)
        .await
        .context("failed to apply schema migrations")?;

    let dao = InstructorDao::new(db);
    info!("Running {:?}", cli.command);

    match cli.command {
        Command::Create { sample } => commands::create_instructor(&dao, sample).await?,
        Command::Find { id } => commands::find_instructor(&dao, id).await?,
        Command::FindDetail { id } => commands::find_instructor_detail(&dao, id).await?,
        Command::Delete { id } => commands::delete_instructor(&dao, id).await?,
    }

    Ok(())
}
