// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use receitas_search_core::SearchError;
use receitas_server_api::ErrorResponse;
use receitas_server_image::ImageError;

/// Every failure a handler can return. The `Display` text is the `error`
/// field of the response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServerError {
	/// Invalid request parameters.
	#[error("{0}")]
	BadRequest(String),

	/// Search provider credentials are not configured.
	#[error("Credenciais ausentes.")]
	MissingCredentials,

	/// The search provider failed; the whole window is discarded.
	#[error("{0}")]
	SearchFailed(String),

	/// An image origin answered with something unusable.
	#[error("{0}")]
	UpstreamError(String),

	/// An upstream did not answer within its deadline.
	#[error("{0}")]
	UpstreamTimeout(String),

	/// Internal server error.
	#[error("{0}")]
	Internal(String),
}

impl ServerError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ServerError::UpstreamError(_) => StatusCode::BAD_GATEWAY,
			ServerError::MissingCredentials
			| ServerError::SearchFailed(_)
			| ServerError::UpstreamTimeout(_)
			| ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<SearchError> for ServerError {
	fn from(err: SearchError) -> Self {
		match err {
			SearchError::UpstreamStatus { status, message } => {
				tracing::warn!(status, message = %message, "search provider returned error status");
				ServerError::SearchFailed(format!("Falha na busca. Status {status}"))
			}
			SearchError::Timeout => {
				tracing::warn!("search provider timed out");
				ServerError::UpstreamTimeout("Falha na busca. Tempo esgotado.".to_string())
			}
			SearchError::Unavailable(detail) | SearchError::InvalidResponse(detail) => {
				tracing::error!(error = %detail, "search provider failed");
				ServerError::SearchFailed("Falha na busca.".to_string())
			}
		}
	}
}

impl From<ImageError> for ServerError {
	fn from(err: ImageError) -> Self {
		if err.is_invalid_input() {
			return ServerError::BadRequest(err.to_string());
		}
		if err.is_bad_upstream() {
			return ServerError::UpstreamError(err.to_string());
		}
		match err {
			ImageError::UpstreamTimeout => ServerError::UpstreamTimeout("Upstream timeout".to_string()),
			ImageError::UpstreamUnavailable(detail) => {
				tracing::error!(error = %detail, "image origin unreachable");
				ServerError::Internal("Upstream fetch failed".to_string())
			}
			ImageError::Transform(detail) => {
				tracing::error!(error = %detail, "image transform failed");
				ServerError::Internal("Image transform failed".to_string())
			}
			other => {
				tracing::error!(error = %other, "image proxy failed");
				ServerError::Internal("Unexpected error".to_string())
			}
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = self.status_code();
		if status.is_server_error() {
			tracing::error!(status = status.as_u16(), error = %self, "request failed");
		} else {
			tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
		}
		(status, Json(ErrorResponse::new(self.to_string()))).into_response()
	}
}
