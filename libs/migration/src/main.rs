//! Schema management CLI for the catalog database.
//!
//! Reads `DATABASE_URL` and runs the sea-orm-migration commands, e.g.
//! `migration up`, `migration down`, `migration status`, `migration fresh`.
//! The API applies pending migrations itself on startup.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
