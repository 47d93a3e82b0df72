use std::sync::Arc;

use anyhow::Context;
use axum::{
	routing::{delete, get, post},
	Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::{Mutex, MutexGuard};
use tower_http::cors::CorsLayer;

use crate::{
	bookings,
	cars::cars,
	config::ServerConfig,
	customers,
	rental::{sample, RentalLedger},
};

/// Handle every request shares. Each handler holds the lock for exactly one
/// ledger operation, which keeps rent/return/add/remove serialized.
#[derive(Clone)]
pub struct AppState(Arc<Mutex<RentalLedger>>);

impl AppState {
	pub fn new(ledger: RentalLedger) -> Self {
		AppState(Arc::new(Mutex::new(ledger)))
	}

	pub async fn ledger(&self) -> MutexGuard<'_, RentalLedger> {
		self.0.lock().await
	}
}

pub fn build_ledger(config: &ServerConfig) -> anyhow::Result<RentalLedger> {
	let mut ledger = RentalLedger::new(config.ledger);
	if config.sample_data {
		sample::seed(&mut ledger).context("seeding sample data")?;
	}
	Ok(ledger)
}

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/cars", get(cars::get_cars).post(cars::add_car))
		.route("/cars/:plate", delete(cars::delete_car))
		.route("/customers", get(customers::get_customers).post(customers::add_customer))
		.route("/customers/:id", delete(customers::delete_customer))
		.route("/rentals", get(bookings::get_rentals).post(bookings::rent))
		.route("/rentals/:id/return", post(bookings::return_rental))
		.layer(CorsLayer::permissive())
		.with_state(state)
}

async fn health() -> Json<Value> {
	Json(json!({"status": "ok"}))
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
	let ledger = build_ledger(&config)?;
	let app = router(AppState::new(ledger));

	let listener = tokio::net::TcpListener::bind(config.addr.trim())
		.await
		.with_context(|| format!("binding {}", config.addr))?;
	log::info!("listening on {} (duplicates: {:?})", listener.local_addr()?, config.ledger.duplicates);
	axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
	log::info!("server stopped");
	Ok(())
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		log::error!("failed to listen for shutdown signal: {}", e);
		std::future::pending::<()>().await;
	}
}
