// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Custom Search Engine client implementation.

use std::time::Duration;

use async_trait::async_trait;
use receitas_common_secret::SecretString;
use receitas_search_core::{BatchRequest, RawSearchItem, SearchError, SearchProvider};
use reqwest::Client;
use tracing::{debug, error, instrument, trace};
use url::Url;

use crate::error::CseError;
use crate::types::{CseApiResponse, CseBatchRequest};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Locale and safety parameters sent with every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CseOptions {
	pub safe: String,
	pub gl: String,
	pub hl: String,
}

impl Default for CseOptions {
	fn default() -> Self {
		Self {
			safe: "active".to_string(),
			gl: "br".to_string(),
			hl: "pt-BR".to_string(),
		}
	}
}

/// Client for the Google Custom Search JSON API.
#[derive(Debug, Clone)]
pub struct CseClient {
	http_client: Client,
	api_key: SecretString,
	cx: String,
	base_url: String,
	options: CseOptions,
}

impl CseClient {
	/// Creates a client with the given API key and search engine ID.
	pub fn new(api_key: SecretString, cx: impl Into<String>) -> Result<Self, CseError> {
		Ok(Self {
			http_client: build_http_client(DEFAULT_TIMEOUT)?,
			api_key,
			cx: cx.into(),
			base_url: DEFAULT_BASE_URL.to_string(),
			options: CseOptions::default(),
		})
	}

	/// Points the client at another endpoint (proxies, test doubles).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn with_options(mut self, options: CseOptions) -> Self {
		self.options = options;
		self
	}

	/// Replaces the per-request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, CseError> {
		self.http_client = build_http_client(timeout)?;
		Ok(self)
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Fetches one batch of results.
	#[instrument(skip(self, request), fields(start = request.start, num = request.num))]
	pub async fn search_batch(
		&self,
		request: &CseBatchRequest,
	) -> Result<Vec<RawSearchItem>, CseError> {
		let mut url = Url::parse(&self.base_url)
			.map_err(|e| CseError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))?;

		url
			.query_pairs_mut()
			.append_pair("key", self.api_key.expose())
			.append_pair("cx", &self.cx)
			.append_pair("q", &request.query)
			.append_pair("num", &request.num.to_string())
			.append_pair("start", &request.start.to_string())
			.append_pair("safe", &self.options.safe)
			.append_pair("gl", &self.options.gl)
			.append_pair("hl", &self.options.hl);

		debug!(url = %self.base_url, "sending search request to Google CSE");
		trace!(query = %request.query, "search parameters");

		let response = self.http_client.get(url).send().await.map_err(|e| {
			if e.is_timeout() {
				error!("CSE request timed out");
				return CseError::Timeout;
			}
			error!(error = %e, "network error during CSE request");
			CseError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "received response from Google CSE");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			error!(status = status.as_u16(), body = %body, "Google API error");
			return Err(CseError::ApiError {
				status: status.as_u16(),
				message: body,
			});
		}

		let body = response.text().await.map_err(|e| {
			if e.is_timeout() {
				return CseError::Timeout;
			}
			error!(error = %e, "failed to read CSE response body");
			CseError::Network(e)
		})?;

		let parsed: CseApiResponse = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "failed to parse Google CSE response");
			CseError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		if let Some(api_error) = parsed.error {
			error!(code = api_error.code, message = %api_error.message, "Google API returned error");
			return Err(CseError::ApiError {
				status: api_error.code,
				message: api_error.message,
			});
		}

		let items: Vec<RawSearchItem> = parsed.items.into_iter().map(RawSearchItem::from).collect();
		debug!(item_count = items.len(), "batch fetched");
		Ok(items)
	}
}

#[async_trait]
impl SearchProvider for CseClient {
	fn name(&self) -> &'static str {
		"google-cse"
	}

	async fn fetch_batch(
		&self,
		query: &str,
		batch: BatchRequest,
	) -> Result<Vec<RawSearchItem>, SearchError> {
		let request = CseBatchRequest::new(query, batch.start, batch.count);
		self.search_batch(&request).await.map_err(SearchError::from)
	}
}

fn build_http_client(timeout: Duration) -> Result<Client, CseError> {
	receitas_common_http::builder()
		.timeout(timeout)
		.build()
		.map_err(CseError::Network)
}
