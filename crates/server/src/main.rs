mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

use config::Config;
use database::db::create_connection;
use log::info;
use migration::{Migrator, MigratorTrait};
use state::AppState;
use std::error::Error;
use utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;

    let db = create_connection(&config.database_url).await?;
    Migrator::up(&db, None).await?;
    info!("Database ready, migrations applied");

    let app = routes::router(AppState::new(db));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Running axum on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
