//! Fleet, roster and rental bookkeeping.
//!
//! Everything here is synchronous and owned by a single [`RentalLedger`];
//! rentals point at cars and customers by key, never by reference.

pub mod booking;
pub mod car;
pub mod customer;
pub mod ledger;
pub mod sample;

pub use booking::{round_cents, Rental, RentalReceipt};
pub use car::{Car, NewCar};
pub use customer::Customer;
pub use ledger::RentalLedger;
