// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The fetch-and-transform pipeline.

use tracing::{debug, info, instrument, warn};

use crate::error::ImageError;
use crate::fetch::{FetchOptions, ImageFetcher};
use crate::request::{ImageLimits, ImageRequest};
use crate::transform::transform;

pub const CONTENT_TYPE_WEBP: &str = "image/webp";
pub const CACHE_CONTROL: &str =
	"public, max-age=86400, s-maxage=86400, stale-while-revalidate=604800";

/// Pipeline steps, in order. Any step can fail; [`ImageError::stage`] says
/// which one did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
	Validating,
	Fetching,
	ContentTypeValidated,
	Transforming,
	Done,
}

/// A re-encoded image ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedImage {
	pub bytes: Vec<u8>,
	pub content_type: &'static str,
	pub cache_control: &'static str,
}

#[derive(Debug, Clone)]
pub struct ImagePipeline {
	fetcher: ImageFetcher,
	limits: ImageLimits,
}

impl ImagePipeline {
	pub fn new(fetch: FetchOptions, limits: ImageLimits) -> Result<Self, ImageError> {
		Ok(Self {
			fetcher: ImageFetcher::new(fetch)?,
			limits,
		})
	}

	pub fn limits(&self) -> ImageLimits {
		self.limits
	}

	pub fn fetch_options(&self) -> &FetchOptions {
		self.fetcher.options()
	}

	/// Validates the raw parameters into an [`ImageRequest`] using this
	/// pipeline's limits.
	pub fn request(
		&self,
		raw_url: Option<&str>,
		width: u32,
		quality: u32,
	) -> Result<ImageRequest, ImageError> {
		ImageRequest::parse(raw_url, width, quality, self.limits).map_err(|e| {
			debug!(stage = ?Stage::Validating, error = %e, "rejected image request");
			e
		})
	}

	/// Fetches the source once and re-encodes it.
	#[instrument(skip(self, request), fields(source = %request.source(), width = request.width(), quality = request.quality()))]
	pub async fn process(&self, request: &ImageRequest) -> Result<TransformedImage, ImageError> {
		debug!(stage = ?Stage::Fetching, "fetching source image");
		let fetched = self.fetcher.fetch(request.source()).await.map_err(log_failure)?;
		debug!(stage = ?Stage::ContentTypeValidated, content_type = %fetched.content_type);

		let width = request.width();
		let quality = request.quality();
		let source_len = fetched.bytes.len();
		debug!(stage = ?Stage::Transforming, source_len);
		let bytes = tokio::task::spawn_blocking(move || transform(&fetched.bytes, width, quality))
			.await
			.map_err(|e| ImageError::Transform(e.to_string()))
			.and_then(|result| result)
			.map_err(log_failure)?;

		info!(stage = ?Stage::Done, source_len, output_len = bytes.len(), "image transformed");
		Ok(TransformedImage {
			bytes,
			content_type: CONTENT_TYPE_WEBP,
			cache_control: CACHE_CONTROL,
		})
	}
}

fn log_failure(e: ImageError) -> ImageError {
	warn!(stage = ?e.stage(), error = %e, "image pipeline failed");
	e
}
