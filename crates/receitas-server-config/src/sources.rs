// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;
use std::str::FromStr;

use receitas_common_config::{env_var_any, load_secret_env_any};
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	GoogleCseConfigLayer, HttpConfigLayer, ImageConfigLayer, LoggingConfigLayer, SearchConfigLayer,
};

/// Default location of the system-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/receitas/server.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::Unreadable {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::MalformedToml {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `RECEITAS_SERVER_<SECTION>_<FIELD>`. The CSE credentials also
/// accept the bare `GOOGLE_API_KEY` and `GOOGLE_CSE_ID` names.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(load_http_from_env()?),
			search: Some(load_search_from_env()?),
			image: Some(load_image_from_env()?),
			logging: Some(load_logging_from_env()),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	env_var_any(&[name])
}

fn env_parse<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
	match env_var(name) {
		Some(value) => match value.trim().parse() {
			Ok(parsed) => Ok(Some(parsed)),
			Err(_) => Err(ConfigError::InvalidEnv {
				var: name.to_string(),
				value,
				expected: std::any::type_name::<T>(),
			}),
		},
		None => Ok(None),
	}
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_var("RECEITAS_SERVER_HTTP_HOST"),
		port: env_parse("RECEITAS_SERVER_HTTP_PORT")?,
	})
}

fn load_search_from_env() -> Result<SearchConfigLayer, ConfigError> {
	let google_cse = GoogleCseConfigLayer {
		api_key: load_secret_env_any(&["RECEITAS_SERVER_GOOGLE_CSE_API_KEY", "GOOGLE_API_KEY"])?,
		search_engine_id: env_var_any(&[
			"RECEITAS_SERVER_GOOGLE_CSE_SEARCH_ENGINE_ID",
			"GOOGLE_CSE_ID",
		]),
		base_url: env_var("RECEITAS_SERVER_GOOGLE_CSE_BASE_URL"),
		safe: env_var("RECEITAS_SERVER_GOOGLE_CSE_SAFE"),
		gl: env_var("RECEITAS_SERVER_GOOGLE_CSE_GL"),
		hl: env_var("RECEITAS_SERVER_GOOGLE_CSE_HL"),
		timeout_secs: env_parse("RECEITAS_SERVER_GOOGLE_CSE_TIMEOUT_SECS")?,
	};

	Ok(SearchConfigLayer {
		google_cse: Some(google_cse),
	})
}

fn load_image_from_env() -> Result<ImageConfigLayer, ConfigError> {
	Ok(ImageConfigLayer {
		timeout_secs: env_parse("RECEITAS_SERVER_IMAGE_TIMEOUT_SECS")?,
		max_width: env_parse("RECEITAS_SERVER_IMAGE_MAX_WIDTH")?,
		default_width: env_parse("RECEITAS_SERVER_IMAGE_DEFAULT_WIDTH")?,
		default_quality: env_parse("RECEITAS_SERVER_IMAGE_DEFAULT_QUALITY")?,
		max_source_bytes: env_parse("RECEITAS_SERVER_IMAGE_MAX_SOURCE_BYTES")?,
		user_agent: env_var("RECEITAS_SERVER_IMAGE_USER_AGENT"),
	})
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_var("RECEITAS_SERVER_LOGGING_LEVEL"),
	}
}
