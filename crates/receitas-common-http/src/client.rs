// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client builders.

use reqwest::{Client, ClientBuilder};

/// Creates a client builder carrying the standard Receitas User-Agent.
///
/// Use this for calls to APIs we hold credentials for (the search provider).
///
/// # Example
/// ```ignore
/// let client = receitas_common_http::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a client builder with a custom User-Agent.
///
/// Image origins frequently reject unknown agents, so the image proxy
/// presents its own bot identity instead of the default one.
pub fn builder_with_user_agent(user_agent: impl Into<String>) -> ClientBuilder {
	Client::builder().user_agent(user_agent.into())
}

/// Returns the standard User-Agent string: `receitas/{version}`.
pub fn user_agent() -> String {
	format!("receitas/{}", env!("CARGO_PKG_VERSION"))
}
