use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use env_logger::Env;
use rental_server::{
	config::{DuplicatePolicy, ServerConfig},
	remote::{report, RentalClient, DEFAULT_SERVER},
	rental::{Customer, NewCar},
	server,
};

/// Car rental desk: run the ledger server or drive it from the shell
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Base URL of a running server
	#[arg(long, global = true, default_value = DEFAULT_SERVER)]
	server: String,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Run the HTTP server
	Serve {
		/// JSON config file
		#[arg(short, long)]
		config: Option<PathBuf>,
		/// Address to bind, overrides config and RENTAL_SERVER_ADDR
		#[arg(long)]
		addr: Option<String>,
		/// Accept repeated car plates and customer ids
		#[arg(long)]
		allow_duplicates: bool,
		/// Start with an empty fleet and roster
		#[arg(long)]
		no_sample_data: bool,
	},
	ListCars {
		#[arg(long)]
		available_only: bool,
	},
	ListCustomers,
	ListRentals {
		#[arg(long)]
		active_only: bool,
	},
	Rent {
		#[arg(long)]
		car: String,
		#[arg(long)]
		customer: String,
		#[arg(long, allow_negative_numbers = true)]
		days: i64,
	},
	Return {
		#[arg(long)]
		rental: String,
	},
	AddCar {
		#[arg(long)]
		plate: String,
		#[arg(long)]
		make: String,
		#[arg(long)]
		model: String,
		#[arg(long = "type")]
		category: String,
		#[arg(long)]
		rate: f64,
	},
	RemoveCar {
		#[arg(long)]
		plate: String,
	},
	AddCustomer {
		#[arg(long)]
		id: String,
		#[arg(long)]
		name: String,
		#[arg(long)]
		license: String,
		#[arg(long)]
		phone: String,
	},
	RemoveCustomer {
		#[arg(long)]
		id: String,
	},
}

#[tokio::main]
async fn main() -> ExitCode {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	match run(args).await {
		Ok(true) => ExitCode::SUCCESS,
		Ok(false) => ExitCode::FAILURE,
		Err(e) => {
			eprintln!("Error: {:#}", e);
			ExitCode::FAILURE
		}
	}
}

async fn run(args: Args) -> anyhow::Result<bool> {
	let client = RentalClient::new(&args.server);
	match args.command {
		Command::Serve {
			config,
			addr,
			allow_duplicates,
			no_sample_data,
		} => {
			let mut config = ServerConfig::load(config.as_deref())?;
			if let Some(addr) = addr {
				config.addr = addr;
			}
			if allow_duplicates {
				config.ledger.duplicates = DuplicatePolicy::Allow;
			}
			if no_sample_data {
				config.sample_data = false;
			}
			server::serve(config).await?;
			Ok(true)
		}
		Command::ListCars { available_only } => Ok(report(client.list_cars(available_only).await?, |cars| {
			if cars.is_empty() {
				println!("no cars");
			}
			for car in cars {
				let status = if car.available { "available" } else { "rented" };
				println!("{:<10} {} [{}, {}]", car.plate, car, car.category, status);
			}
		})),
		Command::ListCustomers => Ok(report(client.list_customers().await?, |customers| {
			if customers.is_empty() {
				println!("no customers");
			}
			for customer in customers {
				println!("{:<6} {} tel {}", customer.id, customer, customer.phone);
			}
		})),
		Command::ListRentals { active_only } => Ok(report(client.list_rentals(active_only).await?, |rentals| {
			if rentals.is_empty() {
				println!("no rentals");
			}
			for rental in rentals {
				let status = if rental.active { "active" } else { "returned" };
				println!("{} until {} ${:.2} [{}]", rental, rental.end_date, rental.total_cost, status);
			}
		})),
		Command::Rent { car, customer, days } => Ok(report(client.rent(&car, &customer, days).await?, |receipt| {
			println!("Rental confirmed");
			println!("{}", receipt);
		})),
		Command::Return { rental } => Ok(report(client.return_rental(&rental).await?, |receipt| {
			println!("Car returned");
			println!("{}", receipt);
		})),
		Command::AddCar {
			plate,
			make,
			model,
			category,
			rate,
		} => {
			let car = NewCar {
				plate,
				make,
				model,
				category,
				daily_rate: rate,
			};
			Ok(report(client.add_car(&car).await?, |car| println!("added {}", car)))
		}
		Command::RemoveCar { plate } => Ok(report(client.remove_car(&plate).await?, |car| println!("removed {}", car))),
		Command::AddCustomer { id, name, license, phone } => {
			let customer = Customer {
				id,
				name,
				license_number: license,
				phone,
			};
			Ok(report(client.add_customer(&customer).await?, |customer| println!("added {}", customer)))
		}
		Command::RemoveCustomer { id } => Ok(report(client.remove_customer(&id).await?, |customer| println!("removed {}", customer))),
	}
}
