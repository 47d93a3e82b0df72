use std::{env, fs, path::Path};

use anyhow::Context;

pub const DEFAULT_ADDR: &str = "0.0.0.0:4000";
pub const ADDR_ENV: &str = "RENTAL_SERVER_ADDR";

/// What to do when a car plate or customer id is added a second time.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
	#[default]
	Reject,
	Allow,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerConfig {
	#[serde(default)]
	pub duplicates: DuplicatePolicy,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
	#[serde(default = "default_addr")]
	pub addr: String,
	#[serde(flatten)]
	pub ledger: LedgerConfig,
	/// Seed the fleet and roster the shop starts the day with.
	#[serde(default = "default_sample_data")]
	pub sample_data: bool,
}

fn default_addr() -> String {
	DEFAULT_ADDR.to_string()
}

fn default_sample_data() -> bool {
	true
}

impl Default for ServerConfig {
	fn default() -> Self {
		ServerConfig {
			addr: default_addr(),
			ledger: LedgerConfig::default(),
			sample_data: default_sample_data(),
		}
	}
}

impl ServerConfig {
	/// Reads `path` if given, otherwise starts from defaults, then applies the
	/// address override from the environment.
	pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
		let mut config = match path {
			Some(path) => {
				let contents = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
				Self::from_json(&contents).with_context(|| format!("parsing config {}", path.display()))?
			}
			None => ServerConfig::default(),
		};
		if let Ok(addr) = env::var(ADDR_ENV) {
			if !addr.trim().is_empty() {
				config.addr = addr.trim().to_string();
			}
		}
		Ok(config)
	}

	pub fn from_json(contents: &str) -> anyhow::Result<Self> {
		Ok(serde_json::from_str(contents)?)
	}
}
