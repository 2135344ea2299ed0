// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Search provider configuration section.

use receitas_common_config::SecretString;
use serde::{Deserialize, Serialize};

const DEFAULT_SAFE: &str = "active";
const DEFAULT_GL: &str = "br";
const DEFAULT_HL: &str = "pt-BR";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfigLayer {
	#[serde(default)]
	pub google_cse: Option<GoogleCseConfigLayer>,
}

impl SearchConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if let Some(other_google) = other.google_cse {
			let google = self.google_cse.get_or_insert_with(Default::default);
			google.merge(other_google);
		}
	}

	pub fn finalize(self) -> SearchConfig {
		SearchConfig {
			google_cse: self.google_cse.unwrap_or_default().finalize(),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleCseConfigLayer {
	pub api_key: Option<SecretString>,
	pub search_engine_id: Option<String>,
	pub base_url: Option<String>,
	pub safe: Option<String>,
	pub gl: Option<String>,
	pub hl: Option<String>,
	pub timeout_secs: Option<u64>,
}

impl GoogleCseConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.search_engine_id.is_some() {
			self.search_engine_id = other.search_engine_id;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.safe.is_some() {
			self.safe = other.safe;
		}
		if other.gl.is_some() {
			self.gl = other.gl;
		}
		if other.hl.is_some() {
			self.hl = other.hl;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> GoogleCseConfig {
		GoogleCseConfig {
			api_key: self.api_key.filter(|key| !key.expose().trim().is_empty()),
			search_engine_id: self.search_engine_id.filter(|id| !id.trim().is_empty()),
			base_url: self.base_url,
			safe: self.safe.unwrap_or_else(|| DEFAULT_SAFE.to_string()),
			gl: self.gl.unwrap_or_else(|| DEFAULT_GL.to_string()),
			hl: self.hl.unwrap_or_else(|| DEFAULT_HL.to_string()),
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
	#[serde(default)]
	pub google_cse: GoogleCseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleCseConfig {
	pub api_key: Option<SecretString>,
	pub search_engine_id: Option<String>,
	/// Endpoint override; the public Google endpoint when unset.
	pub base_url: Option<String>,
	pub safe: String,
	pub gl: String,
	pub hl: String,
	pub timeout_secs: u64,
}

impl Default for GoogleCseConfig {
	fn default() -> Self {
		GoogleCseConfigLayer::default().finalize()
	}
}

impl GoogleCseConfig {
	/// Both the key and the engine id are needed to issue a query.
	pub fn is_configured(&self) -> bool {
		self.api_key.is_some() && self.search_engine_id.is_some()
	}
}
