use log::LevelFilter;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Creates a database connection pool for the given URL
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options
        .sqlx_logging(false)
        .sqlx_logging_level(LevelFilter::Debug);

    // Each connection to an in-memory SQLite database opens a separate database,
    // so the pool must hold exactly one connection for the lifetime of the app
    if database_url.starts_with("sqlite::memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await
}
