//! Handlers driven directly with their extractors, one shared ledger per test.

use axum::{
	extract::{Path, Query, State},
	response::IntoResponse,
	Json,
};
use hyper::StatusCode;
use rental_server::{
	bookings::{self, BookingRequest, RentalFilter},
	cars::cars::{self, CarFilter},
	config::ServerConfig,
	customers,
	error::{ApiError, RentalError},
	rental::{Customer, NewCar, RentalLedger},
	server::{build_ledger, AppState},
};

fn empty_state() -> AppState {
	let mut ledger = RentalLedger::default();
	ledger.add_car(NewCar::new("ABC123", "Toyota", "Camry", "Sedan", 45.99)).unwrap();
	ledger.add_customer(Customer::new("C001", "John Smith", "DL12345", "555-1234")).unwrap();
	AppState::new(ledger)
}

fn booking(car: &str, customer: &str, days: i64) -> Json<BookingRequest> {
	Json(BookingRequest {
		car: car.to_owned(),
		customer: customer.to_owned(),
		days,
	})
}

#[test]
fn sample_data_is_seeded_by_default() {
	let ledger = build_ledger(&ServerConfig::default()).unwrap();
	assert_eq!(ledger.list_cars().len(), 5);
	assert_eq!(ledger.list_customers().len(), 3);
	assert_eq!(ledger.list_available_cars()[0].plate, "ABC123");

	let config = ServerConfig {
		sample_data: false,
		..ServerConfig::default()
	};
	assert!(build_ledger(&config).unwrap().list_cars().is_empty());
}

#[tokio::test]
async fn rent_and_return_over_handlers() {
	let state = empty_state();

	let (status, Json(receipt)) = bookings::rent(State(state.clone()), booking("ABC123", "C001", 3)).await.unwrap();
	assert_eq!(status, StatusCode::CREATED);
	assert_eq!(receipt.rental.id, "R1");
	assert_eq!(receipt.rental.total_cost, 137.97);

	let Json(available) = cars::get_cars(State(state.clone()), Query(CarFilter { available_only: true })).await;
	assert!(available.is_empty());
	let Json(all) = cars::get_cars(State(state.clone()), Query(CarFilter::default())).await;
	assert_eq!(all.len(), 1);

	let Json(active) = bookings::get_rentals(State(state.clone()), Query(RentalFilter { active_only: true })).await;
	assert_eq!(active.len(), 1);

	let Json(returned) = bookings::return_rental(State(state.clone()), Path("R1".to_string())).await.unwrap();
	assert!(!returned.rental.active);
	assert_eq!(returned.car.map(|c| c.available), Some(true));

	let Json(active) = bookings::get_rentals(State(state.clone()), Query(RentalFilter { active_only: true })).await;
	assert!(active.is_empty());
	let Json(history) = bookings::get_rentals(State(state), Query(RentalFilter::default())).await;
	assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn refusals_map_to_status_codes() {
	let state = empty_state();
	bookings::rent(State(state.clone()), booking("ABC123", "C001", 1)).await.unwrap();

	let err = bookings::rent(State(state.clone()), booking("ABC123", "C001", 1)).await.unwrap_err();
	assert_eq!(err.0, RentalError::CarUnavailable { plate: "ABC123".into() });
	assert_eq!(err.into_response().status(), StatusCode::CONFLICT);

	let err = bookings::rent(State(state.clone()), booking("ABC123", "C001", 0)).await.unwrap_err();
	assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

	let err = bookings::return_rental(State(state.clone()), Path("R42".to_string())).await.unwrap_err();
	assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

	let err = cars::delete_car(State(state.clone()), Path("ABC123".to_string())).await.unwrap_err();
	assert_eq!(err.0.kind(), "car_rented");
	assert_eq!(err.into_response().status(), StatusCode::CONFLICT);

	let err = customers::delete_customer(State(state), Path("C404".to_string())).await.unwrap_err();
	assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fleet_and_roster_management() {
	let state = empty_state();

	let (status, Json(car)) = cars::add_car(State(state.clone()), Json(NewCar::new("QWE345", "Tesla", "Model 3", "Electric", 89.99)))
		.await
		.unwrap();
	assert_eq!(status, StatusCode::CREATED);
	assert!(car.available);

	let dup = cars::add_car(State(state.clone()), Json(NewCar::new("QWE345", "Tesla", "Model Y", "Electric", 99.0))).await.unwrap_err();
	assert_eq!(dup.into_response().status(), StatusCode::CONFLICT);

	let Json(removed) = cars::delete_car(State(state.clone()), Path("QWE345".to_string())).await.unwrap();
	assert_eq!(removed.plate, "QWE345");

	let customer = Customer::new("C002", "Emma Johnson", "DL67890", "555-5678");
	let (status, _) = customers::add_customer(State(state.clone()), Json(customer)).await.unwrap();
	assert_eq!(status, StatusCode::CREATED);
	let Json(roster) = customers::get_customers(State(state.clone())).await;
	assert_eq!(roster.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(), vec!["C001", "C002"]);

	let Json(gone) = customers::delete_customer(State(state.clone()), Path("C002".to_string())).await.unwrap();
	assert_eq!(gone.name, "Emma Johnson");
	let Json(roster) = customers::get_customers(State(state)).await;
	assert_eq!(roster.len(), 1);
}

#[test]
fn error_body_carries_kind_and_message() {
	let body = ApiError(RentalError::RentalNotFound { id: "R7".into() }).body();
	assert_eq!(body.error, "rental_not_found");
	assert_eq!(body.message, "rental R7 not found or already returned");
}
