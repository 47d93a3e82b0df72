use axum::{
	response::{IntoResponse, Response},
	Json,
};
use hyper::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RentalError>;

/// Expected outcomes of a ledger operation that did not go through.
///
/// None of these are faults: renting a car that is out, or returning a rental
/// twice, is an ordinary answer the caller branches on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalError {
	#[error("no car with plate {plate}")]
	CarNotFound { plate: String },
	#[error("car {plate} is not available")]
	CarUnavailable { plate: String },
	#[error("car {plate} is out on rent and cannot be removed")]
	CarRented { plate: String },
	#[error("no customer with id {id}")]
	CustomerNotFound { id: String },
	#[error("rental {id} not found or already returned")]
	RentalNotFound { id: String },
	#[error("a car with plate {plate} already exists")]
	DuplicateCar { plate: String },
	#[error("a customer with id {id} already exists")]
	DuplicateCustomer { id: String },
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
}

impl RentalError {
	/// Stable machine-readable name, used as the `error` field on the wire.
	pub fn kind(&self) -> &'static str {
		match self {
			RentalError::CarNotFound { .. } => "car_not_found",
			RentalError::CarUnavailable { .. } => "car_unavailable",
			RentalError::CarRented { .. } => "car_rented",
			RentalError::CustomerNotFound { .. } => "customer_not_found",
			RentalError::RentalNotFound { .. } => "rental_not_found",
			RentalError::DuplicateCar { .. } => "duplicate_car",
			RentalError::DuplicateCustomer { .. } => "duplicate_customer",
			RentalError::InvalidArgument(_) => "invalid_argument",
		}
	}

	pub fn status(&self) -> StatusCode {
		match self {
			RentalError::CarNotFound { .. } | RentalError::CustomerNotFound { .. } | RentalError::RentalNotFound { .. } => {
				StatusCode::NOT_FOUND
			}
			RentalError::CarUnavailable { .. }
			| RentalError::CarRented { .. }
			| RentalError::DuplicateCar { .. }
			| RentalError::DuplicateCustomer { .. } => StatusCode::CONFLICT,
			RentalError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
		}
	}
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
	pub error: String,
	pub message: String,
}

/// Boundary wrapper that turns a ledger outcome into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub RentalError);

impl From<RentalError> for ApiError {
	fn from(value: RentalError) -> Self {
		ApiError(value)
	}
}

impl ApiError {
	pub fn body(&self) -> ErrorBody {
		ErrorBody {
			error: self.0.kind().to_string(),
			message: self.0.to_string(),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let status = self.0.status();
		log::warn!("request rejected ({}): {}", status.as_u16(), self.0);
		(status, Json(self.body())).into_response()
	}
}
