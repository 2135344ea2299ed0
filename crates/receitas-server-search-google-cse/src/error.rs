// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Google CSE client.

use receitas_search_core::SearchError;
use thiserror::Error;

/// Errors that can occur when talking to the Google CSE API.
#[derive(Debug, Error)]
pub enum CseError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// The configured base URL is not a valid URL.
	#[error("Invalid base URL: {0}")]
	InvalidBaseUrl(String),

	/// Invalid or unparseable response body.
	#[error("Invalid response from Google: {0}")]
	InvalidResponse(String),

	/// Google answered with an error status (HTTP or in-body).
	#[error("Google API error: {status} - {message}")]
	ApiError { status: u16, message: String },
}

impl From<CseError> for SearchError {
	fn from(err: CseError) -> Self {
		match err {
			CseError::Timeout => SearchError::Timeout,
			CseError::Network(e) if e.is_timeout() => SearchError::Timeout,
			CseError::Network(e) => SearchError::Unavailable(e.to_string()),
			CseError::InvalidBaseUrl(msg) => SearchError::Unavailable(msg),
			CseError::InvalidResponse(msg) => SearchError::InvalidResponse(msg),
			CseError::ApiError { status, message } => SearchError::UpstreamStatus { status, message },
		}
	}
}
