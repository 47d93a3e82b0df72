use std::fmt;

use crate::error::{RentalError, Result};

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Customer {
	pub id: String,
	pub name: String,
	pub license_number: String,
	pub phone: String,
}

impl Customer {
	pub fn new(id: &str, name: &str, license_number: &str, phone: &str) -> Self {
		Customer {
			id: id.to_owned(),
			name: name.to_owned(),
			license_number: license_number.to_owned(),
			phone: phone.to_owned(),
		}
	}

	pub fn validate(&self) -> Result<()> {
		let fields = [("id", &self.id), ("name", &self.name), ("license number", &self.license_number), ("phone", &self.phone)];
		match fields.iter().find(|(_, value)| value.trim().is_empty()) {
			Some((field, _)) => Err(RentalError::InvalidArgument(format!("customer {} must not be empty", field))),
			None => Ok(()),
		}
	}
}

impl fmt::Display for Customer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.name, self.license_number)
	}
}
