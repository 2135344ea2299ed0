// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Common configuration primitives for Receitas.
//!
//! - [`Secret<T>`]: redacting wrapper (re-exported from [`receitas_common_secret`])
//! - [`load_secret_env`]: secret loading with `*_FILE` support

pub mod env;

pub use receitas_common_secret::{Secret, SecretString, REDACTED};

pub use env::{env_var_any, load_secret_env, load_secret_env_any, SecretEnvError};
