// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the image pipeline.

use thiserror::Error;

use crate::pipeline::Stage;

/// Ways an image request can fail.
///
/// The `Display` text of the input and upstream variants is what clients
/// see in the `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
	#[error("Missing url")]
	MissingUrl,

	#[error("Invalid url")]
	InvalidUrl,

	#[error("Only http/https allowed")]
	UnsupportedScheme,

	#[error("Upstream timeout")]
	UpstreamTimeout,

	/// Transport failure (DNS, connect, TLS, reset).
	#[error("Upstream fetch failed: {0}")]
	UpstreamUnavailable(String),

	#[error("Upstream error {0}")]
	UpstreamStatus(u16),

	#[error("Upstream returned non-image content-type")]
	BadContentType,

	#[error("Upstream image too large")]
	TooLarge,

	/// Decode, resize or encode failure.
	#[error("Image transform failed: {0}")]
	Transform(String),

	/// The outbound HTTP client could not be built.
	#[error("HTTP client error: {0}")]
	Client(String),
}

impl ImageError {
	/// True for errors caused by the caller's parameters.
	pub fn is_invalid_input(&self) -> bool {
		matches!(
			self,
			ImageError::MissingUrl | ImageError::InvalidUrl | ImageError::UnsupportedScheme
		)
	}

	/// True for errors where the origin answered with something unusable.
	pub fn is_bad_upstream(&self) -> bool {
		matches!(
			self,
			ImageError::UpstreamStatus(_) | ImageError::BadContentType | ImageError::TooLarge
		)
	}

	/// The pipeline stage the failure happened in.
	pub fn stage(&self) -> Stage {
		match self {
			ImageError::MissingUrl | ImageError::InvalidUrl | ImageError::UnsupportedScheme => {
				Stage::Validating
			}
			ImageError::UpstreamTimeout
			| ImageError::UpstreamUnavailable(_)
			| ImageError::Client(_) => Stage::Fetching,
			ImageError::UpstreamStatus(_) | ImageError::BadContentType | ImageError::TooLarge => {
				Stage::ContentTypeValidated
			}
			ImageError::Transform(_) => Stage::Transforming,
		}
	}
}
