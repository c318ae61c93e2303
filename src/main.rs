use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use mongodb::Client;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, BIND_ADDRESS, DATABASE_NAME, EXPENSES_COLLECTION};
use crate::store::{ExpenseStore, MongoExpenseStore};

mod balance;
mod config;
mod error;
mod exchange;
mod routes;
mod schemas;
mod store;
mod validation;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Connecting to the expense store");

    let client = Client::with_uri_str(&config.mongodb_uri)
        .await
        .context("failed to connect")?;
    let store: Arc<dyn ExpenseStore> = Arc::new(MongoExpenseStore::new(
        &client,
        DATABASE_NAME,
        EXPENSES_COLLECTION,
    ));
    let store = web::Data::from(store);

    tracing::info!(address = ?BIND_ADDRESS, "Starting HTTP server");
    HttpServer::new(move || {
        // Any origin, method and header is accepted, fine for a prototype only
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .bind(BIND_ADDRESS)?
    .run()
    .await?;

    Ok(())
}
