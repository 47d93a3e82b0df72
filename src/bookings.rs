use axum::{
	extract::{Path, Query, State},
	Json,
};
use hyper::StatusCode;

use crate::{
	error::ApiError,
	rental::{Rental, RentalReceipt},
	server::AppState,
};

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct BookingRequest {
	pub car: String,
	pub customer: String,
	pub days: i64,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct RentalFilter {
	#[serde(default)]
	pub active_only: bool,
}

pub async fn get_rentals(state: State<AppState>, filter: Query<RentalFilter>) -> Json<Vec<Rental>> {
	let ledger = state.ledger().await;
	let rentals = if filter.active_only { ledger.list_active_rentals() } else { ledger.list_rentals() };
	Json(rentals)
}

pub async fn rent(state: State<AppState>, request: Json<BookingRequest>) -> Result<(StatusCode, Json<RentalReceipt>), ApiError> {
	let request = request.0;
	let receipt = state.ledger().await.rent_car(&request.customer, &request.car, request.days)?;
	Ok((StatusCode::CREATED, Json(receipt)))
}

pub async fn return_rental(state: State<AppState>, Path(rental_id): Path<String>) -> Result<Json<RentalReceipt>, ApiError> {
	let receipt = state.ledger().await.return_car(&rental_id)?;
	Ok(Json(receipt))
}
