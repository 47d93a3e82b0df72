use chrono::{Local, NaiveDate};
use log::{debug, info};

use super::{
	booking::{Rental, RentalReceipt},
	car::{Car, NewCar},
	customer::Customer,
};
use crate::{
	config::{DuplicatePolicy, LedgerConfig},
	error::{RentalError, Result},
};

/// Single source of truth for the fleet, the customer roster and every rental
/// ever opened. All listings are owned snapshots.
#[derive(Debug, Clone)]
pub struct RentalLedger {
	config: LedgerConfig,
	cars: Vec<Car>,
	customers: Vec<Customer>,
	rentals: Vec<Rental>,
	next_rental: u64,
	next_car: u64,
}

impl Default for RentalLedger {
	fn default() -> Self {
		RentalLedger::new(LedgerConfig::default())
	}
}

impl RentalLedger {
	pub fn new(config: LedgerConfig) -> Self {
		RentalLedger {
			config,
			cars: Vec::new(),
			customers: Vec::new(),
			rentals: Vec::new(),
			next_rental: 1,
			next_car: 1,
		}
	}

	pub fn add_car(&mut self, car: NewCar) -> Result<Car> {
		car.validate()?;
		if self.config.duplicates == DuplicatePolicy::Reject && self.find_car(&car.plate).is_some() {
			return Err(RentalError::DuplicateCar { plate: car.plate });
		}
		let car = car.register(self.next_car);
		self.next_car += 1;
		debug!("fleet: added {}", car);
		self.cars.push(car.clone());
		Ok(car)
	}

	pub fn list_cars(&self) -> Vec<Car> {
		self.cars.clone()
	}

	pub fn list_available_cars(&self) -> Vec<Car> {
		self.cars.iter().filter(|c| c.available).cloned().collect()
	}

	pub fn find_car(&self, plate: &str) -> Option<&Car> {
		self.cars.iter().find(|c| c.plate == plate)
	}

	/// Removes the first available car with `plate`. A car on rent stays put.
	pub fn remove_car(&mut self, plate: &str) -> Result<Car> {
		if let Some(pos) = self.cars.iter().position(|c| c.plate == plate && c.available) {
			let car = self.cars.remove(pos);
			debug!("fleet: removed {}", car);
			return Ok(car);
		}
		match self.find_car(plate) {
			Some(_) => Err(RentalError::CarRented { plate: plate.to_owned() }),
			None => Err(RentalError::CarNotFound { plate: plate.to_owned() }),
		}
	}

	pub fn add_customer(&mut self, customer: Customer) -> Result<Customer> {
		customer.validate()?;
		if self.config.duplicates == DuplicatePolicy::Reject && self.find_customer(&customer.id).is_some() {
			return Err(RentalError::DuplicateCustomer { id: customer.id });
		}
		debug!("roster: added {}", customer);
		self.customers.push(customer.clone());
		Ok(customer)
	}

	pub fn list_customers(&self) -> Vec<Customer> {
		self.customers.clone()
	}

	pub fn find_customer(&self, id: &str) -> Option<&Customer> {
		self.customers.iter().find(|c| c.id == id)
	}

	pub fn remove_customer(&mut self, id: &str) -> Result<Customer> {
		let pos = self
			.customers
			.iter()
			.position(|c| c.id == id)
			.ok_or_else(|| RentalError::CustomerNotFound { id: id.to_owned() })?;
		let customer = self.customers.remove(pos);
		debug!("roster: removed {}", customer);
		Ok(customer)
	}

	pub fn rent_car(&mut self, customer_id: &str, plate: &str, days: i64) -> Result<RentalReceipt> {
		self.rent_car_on(customer_id, plate, days, Local::now().date_naive())
	}

	/// Opens a rental starting on `start_date`. Nothing changes unless every
	/// precondition holds, and a failed attempt does not consume a rental id.
	pub fn rent_car_on(&mut self, customer_id: &str, plate: &str, days: i64, start_date: NaiveDate) -> Result<RentalReceipt> {
		let days = match u32::try_from(days) {
			Ok(d) if d > 0 => d,
			_ => return Err(RentalError::InvalidArgument(format!("rental days must be a positive count, got {}", days))),
		};
		let customer = self
			.find_customer(customer_id)
			.cloned()
			.ok_or_else(|| RentalError::CustomerNotFound { id: customer_id.to_owned() })?;
		if self.find_car(plate).is_none() {
			return Err(RentalError::CarNotFound { plate: plate.to_owned() });
		}
		let pos = self
			.cars
			.iter()
			.position(|c| c.plate == plate && c.available)
			.ok_or_else(|| RentalError::CarUnavailable { plate: plate.to_owned() })?;

		let rental = Rental::open(self.next_rental, &self.cars[pos], &customer, days, start_date)
			.ok_or_else(|| RentalError::InvalidArgument(format!("{} days from {} is out of calendar range", days, start_date)))?;
		self.next_rental += 1;
		self.cars[pos].available = false;
		self.rentals.push(rental.clone());
		info!("rental {} opened: {} for {} days, ${:.2}", rental.id, plate, days, rental.total_cost);

		Ok(RentalReceipt {
			rental,
			car: Some(self.cars[pos].clone()),
			customer: Some(customer),
		})
	}

	/// Closes the earliest active rental with `rental_id` and puts the very car
	/// it took back in the available pool.
	pub fn return_car(&mut self, rental_id: &str) -> Result<RentalReceipt> {
		let rental = self
			.rentals
			.iter_mut()
			.find(|r| r.id == rental_id && r.active)
			.ok_or_else(|| RentalError::RentalNotFound { id: rental_id.to_owned() })?;
		rental.active = false;
		let rental = rental.clone();

		let car = match self.cars.iter().position(|c| c.serial == rental.car_serial) {
			Some(pos) => {
				self.cars[pos].available = true;
				Some(self.cars[pos].clone())
			}
			None => self.find_car(&rental.car_plate).cloned(),
		};
		info!("rental {} closed: {} is available again", rental.id, rental.car_plate);

		Ok(RentalReceipt {
			customer: self.find_customer(&rental.customer_id).cloned(),
			rental,
			car,
		})
	}

	pub fn list_rentals(&self) -> Vec<Rental> {
		self.rentals.clone()
	}

	pub fn list_active_rentals(&self) -> Vec<Rental> {
		self.rentals.iter().filter(|r| r.active).cloned().collect()
	}
}
