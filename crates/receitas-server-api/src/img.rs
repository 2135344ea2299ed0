// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Deserialize;

#[cfg(feature = "openapi")]
use utoipa::IntoParams;

/// Raw image proxy parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct ImageQuery {
	/// Absolute http(s) URL of the source image.
	pub url: Option<String>,
	/// Output width in pixels (default 240, max 800). Never enlarges.
	pub w: Option<String>,
	/// WebP quality, 1-100 (default 60).
	pub q: Option<String>,
}
