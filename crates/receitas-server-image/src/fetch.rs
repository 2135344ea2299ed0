// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Bounded fetch of a remote image.

use std::time::Duration;

use receitas_common_http::{builder_with_user_agent, with_deadline};
use reqwest::header::{ACCEPT, CONTENT_TYPE, REFERER};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::error::ImageError;

/// `Accept` header sent to image origins.
pub const ACCEPT_IMAGES: &str = "image/avif,image/webp,image/*;q=0.8,*/*;q=0.5";

#[derive(Debug, Clone)]
pub struct FetchOptions {
	/// Budget for the whole fetch, headers and body.
	pub timeout: Duration,
	pub user_agent: String,
	pub max_source_bytes: u64,
}

impl Default for FetchOptions {
	fn default() -> Self {
		Self {
			timeout: Duration::from_secs(8),
			user_agent: "BrasilReceitasBot/1.0 (+img-proxy)".to_string(),
			max_source_bytes: 15 * 1024 * 1024,
		}
	}
}

/// The raw upstream body of an image response.
#[derive(Debug, Clone)]
pub struct FetchedImage {
	pub bytes: Vec<u8>,
	pub content_type: String,
}

#[derive(Debug, Clone)]
pub struct ImageFetcher {
	client: Client,
	options: FetchOptions,
}

impl ImageFetcher {
	pub fn new(options: FetchOptions) -> Result<Self, ImageError> {
		let client = builder_with_user_agent(options.user_agent.clone())
			.build()
			.map_err(|e| ImageError::Client(e.to_string()))?;
		Ok(Self { client, options })
	}

	pub fn options(&self) -> &FetchOptions {
		&self.options
	}

	/// Fetches `source` once. When the deadline passes the request is
	/// dropped and [`ImageError::UpstreamTimeout`] is returned.
	pub async fn fetch(&self, source: &Url) -> Result<FetchedImage, ImageError> {
		with_deadline(self.options.timeout, self.fetch_unbounded(source))
			.await
			.map_err(|_| ImageError::UpstreamTimeout)?
	}

	async fn fetch_unbounded(&self, source: &Url) -> Result<FetchedImage, ImageError> {
		let mut response = self
			.client
			.get(source.clone())
			.header(ACCEPT, ACCEPT_IMAGES)
			.header(REFERER, source.origin().ascii_serialization())
			.send()
			.await
			.map_err(transport_error)?;

		let status = response.status();
		debug!(status = %status, "image origin responded");
		if !status.is_success() {
			return Err(ImageError::UpstreamStatus(status.as_u16()));
		}

		let content_type = response
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|v| v.to_str().ok())
			.unwrap_or_default()
			.to_string();
		if !content_type.contains("image") {
			warn!(content_type = %content_type, "origin returned non-image content");
			return Err(ImageError::BadContentType);
		}

		let limit = self.options.max_source_bytes;
		if response.content_length().is_some_and(|len| len > limit) {
			return Err(ImageError::TooLarge);
		}

		let mut bytes = Vec::new();
		while let Some(chunk) = response.chunk().await.map_err(transport_error)? {
			if (bytes.len() + chunk.len()) as u64 > limit {
				return Err(ImageError::TooLarge);
			}
			bytes.extend_from_slice(&chunk);
		}

		debug!(bytes = bytes.len(), content_type = %content_type, "image fetched");
		Ok(FetchedImage {
			bytes,
			content_type,
		})
	}
}

fn transport_error(e: reqwest::Error) -> ImageError {
	warn!(error = %e, "image fetch failed");
	ImageError::UpstreamUnavailable(e.to_string())
}
