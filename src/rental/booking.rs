use std::fmt;

use chrono::{Days, NaiveDate};

use super::{car::Car, customer::Customer};

pub const RENTAL_ID_PREFIX: &str = "R";

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct Rental {
	pub id: String,
	pub car_plate: String,
	pub customer_id: String,
	pub start_date: NaiveDate,
	pub end_date: NaiveDate,
	/// Daily rate times days at the moment of renting, rounded to cents.
	pub total_cost: f64,
	pub active: bool,
	#[serde(skip)]
	pub(crate) car_serial: u64,
}

impl Rental {
	pub(crate) fn open(seq: u64, car: &Car, customer: &Customer, days: u32, start_date: NaiveDate) -> Option<Self> {
		let end_date = start_date.checked_add_days(Days::new(u64::from(days)))?;
		Some(Rental {
			id: format!("{}{}", RENTAL_ID_PREFIX, seq),
			car_plate: car.plate.clone(),
			customer_id: customer.id.clone(),
			start_date,
			end_date,
			total_cost: round_cents(car.daily_rate * f64::from(days)),
			active: true,
			car_serial: car.serial,
		})
	}

	pub fn days(&self) -> i64 {
		(self.end_date - self.start_date).num_days()
	}
}

impl fmt::Display for Rental {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {} rented by {}", self.id, self.car_plate, self.customer_id)
	}
}

pub fn round_cents(amount: f64) -> f64 {
	(amount * 100.0).round() / 100.0
}

/// What a rent or return hands back to the caller: the rental plus how the
/// car and customer looked when it happened.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
pub struct RentalReceipt {
	pub rental: Rental,
	pub car: Option<Car>,
	pub customer: Option<Customer>,
}

impl fmt::Display for RentalReceipt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Rental ID:  {}", self.rental.id)?;
		match &self.car {
			Some(car) => writeln!(f, "Car:        {}", car)?,
			None => writeln!(f, "Car:        {}", self.rental.car_plate)?,
		}
		match &self.customer {
			Some(customer) => writeln!(f, "Customer:   {}", customer)?,
			None => writeln!(f, "Customer:   {}", self.rental.customer_id)?,
		}
		writeln!(f, "Period:     {} to {} ({} days)", self.rental.start_date, self.rental.end_date, self.rental.days())?;
		write!(f, "Total cost: ${:.2}", self.rental.total_cost)
	}
}
