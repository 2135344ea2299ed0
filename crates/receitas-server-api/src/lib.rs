// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

pub mod error;
pub mod health;
pub mod img;
pub mod search;

pub use error::ErrorResponse;
pub use health::{
	ComponentsHealth, GoogleCseHealth, HealthResponse, HealthStatus, ImageProxyHealth,
};
pub use img::ImageQuery;
pub use receitas_search_core::SearchResult;
pub use search::{SearchQuery, SearchResponse};
