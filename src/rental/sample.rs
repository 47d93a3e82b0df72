use super::{car::NewCar, customer::Customer, ledger::RentalLedger};
use crate::error::Result;

/// Stocks an empty ledger with the demo fleet and roster.
pub fn seed(ledger: &mut RentalLedger) -> Result<()> {
	let fleet = [
		NewCar::new("ABC123", "Toyota", "Camry", "Sedan", 45.99),
		NewCar::new("XYZ789", "Ford", "Explorer", "SUV", 65.50),
		NewCar::new("LMN456", "BMW", "740i", "Luxury", 120.00),
		NewCar::new("JKL012", "Honda", "Civic", "Compact", 35.75),
		NewCar::new("QWE345", "Tesla", "Model 3", "Electric", 89.99),
	];
	for car in fleet {
		ledger.add_car(car)?;
	}

	let roster = [
		Customer::new("C001", "John Smith", "DL12345", "555-1234"),
		Customer::new("C002", "Emma Johnson", "DL67890", "555-5678"),
		Customer::new("C003", "Michael Brown", "DL24680", "555-9012"),
	];
	for customer in roster {
		ledger.add_customer(customer)?;
	}
	log::info!("seeded {} cars and {} customers", ledger.list_cars().len(), ledger.list_customers().len());
	Ok(())
}
