use std::fmt;

use crate::error::{RentalError, Result};

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Car {
	pub plate: String,
	pub make: String,
	pub model: String,
	/// Free-text category such as "Sedan" or "SUV".
	#[serde(rename = "type")]
	pub category: String,
	pub daily_rate: f64,
	pub available: bool,
	/// Ledger-assigned key, distinct even when plates repeat.
	#[serde(skip)]
	pub(crate) serial: u64,
}

/// Fleet entry as submitted by a client; availability is always set by the ledger.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct NewCar {
	pub plate: String,
	pub make: String,
	pub model: String,
	#[serde(rename = "type")]
	pub category: String,
	pub daily_rate: f64,
}

impl NewCar {
	pub fn new(plate: &str, make: &str, model: &str, category: &str, daily_rate: f64) -> Self {
		NewCar {
			plate: plate.to_owned(),
			make: make.to_owned(),
			model: model.to_owned(),
			category: category.to_owned(),
			daily_rate,
		}
	}

	pub fn validate(&self) -> Result<()> {
		for (field, value) in [("plate", &self.plate), ("make", &self.make), ("model", &self.model), ("type", &self.category)] {
			if value.trim().is_empty() {
				return Err(RentalError::InvalidArgument(format!("car {} must not be empty", field)));
			}
		}
		if !self.daily_rate.is_finite() || self.daily_rate < 0.0 {
			return Err(RentalError::InvalidArgument(format!("daily rate {} must be a non-negative amount", self.daily_rate)));
		}
		Ok(())
	}
}

impl NewCar {
	pub(crate) fn register(self, serial: u64) -> Car {
		Car {
			plate: self.plate,
			make: self.make,
			model: self.model,
			category: self.category,
			daily_rate: self.daily_rate,
			available: true,
			serial,
		}
	}
}

impl fmt::Display for Car {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} ({}) - ${:.2}/day", self.make, self.model, self.plate, self.daily_rate)
	}
}
