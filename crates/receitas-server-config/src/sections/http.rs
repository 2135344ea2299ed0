// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Listener address.

use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
	pub host: String,
	pub port: u16,
}

impl HttpConfig {
	/// `host:port`, ready for `TcpListener::bind`.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}
}

impl Default for HttpConfig {
	fn default() -> Self {
		HttpConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfigLayer {
	#[serde(default)]
	pub host: Option<String>,
	#[serde(default)]
	pub port: Option<u16>,
}

impl HttpConfigLayer {
	pub fn merge(&mut self, other: Self) {
		self.host = other.host.or(self.host.take());
		self.port = other.port.or(self.port);
	}

	pub fn finalize(self) -> HttpConfig {
		HttpConfig {
			host: self
				.host
				.filter(|h| !h.trim().is_empty())
				.unwrap_or_else(|| DEFAULT_HOST.to_string()),
			port: self.port.unwrap_or(DEFAULT_PORT),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn listens_on_all_interfaces_by_default() {
		assert_eq!(HttpConfig::default().socket_addr(), "0.0.0.0:8080");
	}

	#[test]
	fn later_layer_wins_per_field() {
		let mut base = HttpConfigLayer {
			host: Some("127.0.0.1".to_string()),
			port: Some(3000),
		};
		base.merge(HttpConfigLayer {
			host: None,
			port: Some(9000),
		});
		assert_eq!(base.finalize().socket_addr(), "127.0.0.1:9000");
	}

	#[test]
	fn blank_host_falls_back_to_default() {
		let config = HttpConfigLayer {
			host: Some("  ".to_string()),
			port: None,
		}
		.finalize();
		assert_eq!(config.host, "0.0.0.0");
	}
}
