// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Provider-agnostic search errors.

use thiserror::Error;

/// Errors a [`crate::SearchProvider`] can report for a batch.
///
/// Any of these aborts the whole window; partial results are never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
	/// The provider answered with a non-success HTTP status.
	#[error("upstream returned status {status}: {message}")]
	UpstreamStatus { status: u16, message: String },

	/// The provider did not answer in time.
	#[error("upstream request timed out")]
	Timeout,

	/// Transport-level failure (DNS, connect, TLS, reset).
	#[error("upstream unavailable: {0}")]
	Unavailable(String),

	/// The provider answered 2xx with a body we could not parse.
	#[error("invalid upstream response: {0}")]
	InvalidResponse(String),
}
