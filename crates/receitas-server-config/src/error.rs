// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration loading failures.

use std::path::PathBuf;

use receitas_common_config::SecretEnvError;

/// Why the server refused to start with the given configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// An environment variable is set but does not parse as its field type.
	#[error("{var}={value:?} is not a valid {expected}")]
	InvalidEnv {
		var: String,
		value: String,
		expected: &'static str,
	},

	#[error("cannot read {path}: {source}")]
	Unreadable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("malformed TOML in {path}: {source}")]
	MalformedToml {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// A resolved section breaks one of its own rules.
	#[error("[{section}] {message}")]
	Invalid {
		section: &'static str,
		message: String,
	},

	#[error(transparent)]
	Secret(#[from] SecretEnvError),
}
