use axum::{
	extract::{Path, Query, State},
	Json,
};
use hyper::StatusCode;

use crate::{
	error::ApiError,
	rental::{Car, NewCar},
	server::AppState,
};

#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct CarFilter {
	#[serde(default)]
	pub available_only: bool,
}

pub async fn get_cars(state: State<AppState>, filter: Query<CarFilter>) -> Json<Vec<Car>> {
	let ledger = state.ledger().await;
	let cars = if filter.available_only { ledger.list_available_cars() } else { ledger.list_cars() };
	Json(cars)
}

pub async fn add_car(state: State<AppState>, car: Json<NewCar>) -> Result<(StatusCode, Json<Car>), ApiError> {
	let car = state.ledger().await.add_car(car.0)?;
	Ok((StatusCode::CREATED, Json(car)))
}

pub async fn delete_car(state: State<AppState>, Path(plate): Path<String>) -> Result<Json<Car>, ApiError> {
	let car = state.ledger().await.remove_car(&plate)?;
	Ok(Json(car))
}
