// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment helpers for loading credentials.
//!
//! Secrets follow the `VAR` / `VAR_FILE` convention so that the search key can
//! be mounted as a Docker or Kubernetes secret instead of living in the
//! process environment.

use std::path::PathBuf;
use std::{env, fs};

use receitas_common_secret::Secret;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Load a secret from `{var}_FILE` (preferred) or `{var}`.
///
/// A single trailing newline is stripped from file contents. Empty values are
/// treated as unset: a blank API key is as useless as a missing one.
pub fn load_secret_env(var: &str) -> Result<Option<Secret<String>>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(&path_str);
		let content = fs::read_to_string(&path).map_err(|e| SecretEnvError::Io {
			path: path.clone(),
			source: e,
		})?;

		let value = content.strip_suffix('\n').unwrap_or(&content);
		if value.is_empty() {
			return Ok(None);
		}
		return Ok(Some(Secret::new(value.to_string())));
	}

	match env::var(var) {
		Ok(value) if !value.is_empty() => Ok(Some(Secret::new(value))),
		_ => Ok(None),
	}
}

/// Load a secret from the first variable in `vars` that is set.
///
/// Used for credentials that have both a namespaced name and a legacy
/// deployment name (e.g. `RECEITAS_SERVER_GOOGLE_CSE_API_KEY`, `GOOGLE_API_KEY`).
pub fn load_secret_env_any(vars: &[&str]) -> Result<Option<Secret<String>>, SecretEnvError> {
	for var in vars {
		if let Some(secret) = load_secret_env(var)? {
			return Ok(Some(secret));
		}
	}
	Ok(None)
}

/// Read the first non-empty plain variable in `vars`.
pub fn env_var_any(vars: &[&str]) -> Option<String> {
	vars
		.iter()
		.find_map(|var| env::var(var).ok().filter(|v| !v.is_empty()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn returns_none_when_not_set() {
		let var = "RECEITAS_TEST_UNSET_SECRET_9001";
		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));

		assert!(load_secret_env(var).unwrap().is_none());
	}

	#[test]
	fn reads_direct_value() {
		let var = "RECEITAS_TEST_DIRECT_SECRET_9001";
		env::set_var(var, "direct-key");

		let secret = load_secret_env(var).unwrap().unwrap();
		assert_eq!(secret.expose(), "direct-key");

		env::remove_var(var);
	}

	#[test]
	fn empty_direct_value_is_unset() {
		let var = "RECEITAS_TEST_EMPTY_SECRET_9001";
		env::set_var(var, "");

		assert!(load_secret_env(var).unwrap().is_none());

		env::remove_var(var);
	}

	#[test]
	fn file_takes_precedence_and_strips_newline() {
		let var = "RECEITAS_TEST_FILE_SECRET_9001";
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "file-key").unwrap();

		env::set_var(var, "direct-key");
		env::set_var(format!("{var}_FILE"), file.path().to_str().unwrap());

		let secret = load_secret_env(var).unwrap().unwrap();
		assert_eq!(secret.expose(), "file-key");

		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn missing_file_is_an_error() {
		let var = "RECEITAS_TEST_MISSING_FILE_SECRET_9001";
		env::set_var(format!("{var}_FILE"), "/nonexistent/receitas/secret");

		assert!(matches!(
			load_secret_env(var),
			Err(SecretEnvError::Io { .. })
		));

		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn empty_file_path_is_an_error() {
		let var = "RECEITAS_TEST_EMPTY_PATH_SECRET_9001";
		env::set_var(format!("{var}_FILE"), "");

		assert!(matches!(
			load_secret_env(var),
			Err(SecretEnvError::EmptyPath { .. })
		));

		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn any_prefers_first_set_variable() {
		let primary = "RECEITAS_TEST_ANY_PRIMARY_9001";
		let legacy = "RECEITAS_TEST_ANY_LEGACY_9001";
		env::remove_var(primary);
		env::set_var(legacy, "legacy-key");

		let secret = load_secret_env_any(&[primary, legacy]).unwrap().unwrap();
		assert_eq!(secret.expose(), "legacy-key");

		env::set_var(primary, "primary-key");
		let secret = load_secret_env_any(&[primary, legacy]).unwrap().unwrap();
		assert_eq!(secret.expose(), "primary-key");

		env::remove_var(primary);
		env::remove_var(legacy);
	}

	#[test]
	fn env_var_any_skips_empty_values() {
		let first = "RECEITAS_TEST_PLAIN_FIRST_9001";
		let second = "RECEITAS_TEST_PLAIN_SECOND_9001";
		env::set_var(first, "");
		env::set_var(second, "engine-id");

		assert_eq!(env_var_any(&[first, second]), Some("engine-id".to_string()));

		env::remove_var(first);
		env::remove_var(second);
	}
}
