use axum::{
	extract::{Path, State},
	Json,
};
use hyper::StatusCode;

use crate::{error::ApiError, rental::Customer, server::AppState};

pub async fn get_customers(state: State<AppState>) -> Json<Vec<Customer>> {
	Json(state.ledger().await.list_customers())
}

pub async fn add_customer(state: State<AppState>, customer: Json<Customer>) -> Result<(StatusCode, Json<Customer>), ApiError> {
	let customer = state.ledger().await.add_customer(customer.0)?;
	Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn delete_customer(state: State<AppState>, Path(id): Path<String>) -> Result<Json<Customer>, ApiError> {
	let customer = state.ledger().await.remove_customer(&id)?;
	Ok(Json(customer))
}
