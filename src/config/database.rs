//! Database configuration module for finance-buddy.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust models.

use crate::entities::{Expense, Salary};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::debug;

/// Opens the ledger at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to {}", database_url);
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the `salary` and `expenses` tables if they do not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut salary_table = schema.create_table_from_entity(Salary);
    salary_table.if_not_exists();
    let mut expense_table = schema.create_table_from_entity(Expense);
    expense_table.if_not_exists();

    db.execute(builder.build(&salary_table)).await?;
    db.execute(builder.build(&expense_table)).await?;

    Ok(())
}

/// Connects and makes sure the schema exists. This is what `main` calls on startup.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection> {
    let db = create_connection(database_url).await?;
    create_tables(&db).await?;
    Ok(db)
}
