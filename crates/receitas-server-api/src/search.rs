// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use receitas_search_core::SearchResult;
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::{IntoParams, ToSchema};

/// Raw search parameters. Numbers stay strings here so malformed input
/// falls back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
	/// Search text. Empty or blank returns no items.
	pub q: Option<String>,
	/// 1-based page number (default 1).
	pub page: Option<String>,
	/// Results per page (default 10, max 50).
	pub per_page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SearchResponse {
	pub items: Vec<SearchResult>,
}

impl SearchResponse {
	pub fn empty() -> Self {
		Self { items: Vec::new() }
	}
}
