//! Car rental bookkeeping served over HTTP.
//!
//! [`rental::RentalLedger`] holds the fleet, customers and rentals; [`server`]
//! puts one ledger behind an axum router and [`remote`] talks to it.

pub mod bookings;
pub mod cars;
pub mod config;
pub mod customers;
pub mod error;
pub mod remote;
pub mod rental;
pub mod server;
