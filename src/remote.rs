use anyhow::{anyhow, Context};
use reqwest::{Method, Response, Url};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
	bookings::BookingRequest,
	error::ErrorBody,
	rental::{Car, Customer, NewCar, Rental, RentalReceipt},
};

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:4000";

/// Result of a call the server understood. The outer `anyhow::Result` of each
/// method covers transport and decoding problems.
pub type Outcome<T> = Result<T, ErrorBody>;

pub struct RentalClient {
	base_url: String,
	http: reqwest::Client,
}

impl RentalClient {
	pub fn new(base_url: &str) -> Self {
		RentalClient {
			base_url: base_url.trim_end_matches('/').to_owned(),
			http: reqwest::Client::new(),
		}
	}

	pub async fn list_cars(&self, available_only: bool) -> anyhow::Result<Outcome<Vec<Car>>> {
		let url = self.url(&["cars"], Some(("available_only", available_only)))?;
		self.send::<(), _>(Method::GET, url, None).await
	}

	pub async fn add_car(&self, car: &NewCar) -> anyhow::Result<Outcome<Car>> {
		self.send(Method::POST, self.url(&["cars"], None)?, Some(car)).await
	}

	pub async fn remove_car(&self, plate: &str) -> anyhow::Result<Outcome<Car>> {
		self.send::<(), _>(Method::DELETE, self.url(&["cars", plate], None)?, None).await
	}

	pub async fn list_customers(&self) -> anyhow::Result<Outcome<Vec<Customer>>> {
		self.send::<(), _>(Method::GET, self.url(&["customers"], None)?, None).await
	}

	pub async fn add_customer(&self, customer: &Customer) -> anyhow::Result<Outcome<Customer>> {
		self.send(Method::POST, self.url(&["customers"], None)?, Some(customer)).await
	}

	pub async fn remove_customer(&self, id: &str) -> anyhow::Result<Outcome<Customer>> {
		self.send::<(), _>(Method::DELETE, self.url(&["customers", id], None)?, None).await
	}

	pub async fn list_rentals(&self, active_only: bool) -> anyhow::Result<Outcome<Vec<Rental>>> {
		let url = self.url(&["rentals"], Some(("active_only", active_only)))?;
		self.send::<(), _>(Method::GET, url, None).await
	}

	pub async fn rent(&self, car: &str, customer: &str, days: i64) -> anyhow::Result<Outcome<RentalReceipt>> {
		let request = BookingRequest {
			car: car.to_owned(),
			customer: customer.to_owned(),
			days,
		};
		self.send(Method::POST, self.url(&["rentals"], None)?, Some(&request)).await
	}

	pub async fn return_rental(&self, rental_id: &str) -> anyhow::Result<Outcome<RentalReceipt>> {
		self.send::<(), _>(Method::POST, self.url(&["rentals", rental_id, "return"], None)?, None).await
	}

	/// Joins `segments` onto the base URL, percent-encoding each one, so a plate
	/// like `AB/12` stays a single path segment.
	fn url(&self, segments: &[&str], flag: Option<(&str, bool)>) -> anyhow::Result<Url> {
		let mut url = Url::parse(&self.base_url).with_context(|| format!("invalid server url {}", self.base_url))?;
		url.path_segments_mut()
			.map_err(|_| anyhow!("server url {} cannot take a path", self.base_url))?
			.pop_if_empty()
			.extend(segments);
		if let Some((key, value)) = flag {
			url.query_pairs_mut().append_pair(key, if value { "true" } else { "false" });
		}
		Ok(url)
	}

	async fn send<B: Serialize, T: DeserializeOwned>(&self, method: Method, url: Url, body: Option<&B>) -> anyhow::Result<Outcome<T>> {
		log::debug!("{} {}", method, url);
		let mut request = self.http.request(method, url);
		if let Some(body) = body {
			request = request.json(body);
		}
		let response = request.send().await.with_context(|| format!("contacting {}", self.base_url))?;
		decode(response).await
	}
}

async fn decode<T: DeserializeOwned>(response: Response) -> anyhow::Result<Outcome<T>> {
	let status = response.status();
	if status.is_success() {
		let value = response.json::<T>().await.context("decoding server response")?;
		return Ok(Ok(value));
	}
	let text = response.text().await.context("reading error body")?;
	match serde_json::from_str::<ErrorBody>(&text) {
		Ok(body) => Ok(Err(body)),
		Err(_) => Ok(Err(ErrorBody {
			error: format!("http_{}", status.as_u16()),
			message: if text.is_empty() { status.to_string() } else { text },
		})),
	}
}

/// Prints a successful outcome with `show`, or the server's refusal on stderr.
/// The return value is whether the command succeeded.
pub fn report<T>(outcome: Outcome<T>, show: impl FnOnce(T)) -> bool {
	match outcome {
		Ok(value) => {
			show(value);
			true
		}
		Err(ErrorBody { error, message }) => {
			eprintln!("Error ({}): {}", error, message);
			false
		}
	}
}
