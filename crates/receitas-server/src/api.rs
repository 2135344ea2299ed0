// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use std::{sync::Arc, time::Duration};

use axum::{routing::get, Router};
use receitas_search_core::SearchService;
use receitas_server_config::ServerConfig;
use receitas_server_image::{FetchOptions, ImageLimits, ImagePipeline};
use receitas_server_search_google_cse::{CseClient, CseOptions};

use crate::{error::ServerError, routes};

/// Shared handler state.
///
/// `search` is `None` when the provider credentials are missing; the search
/// route then answers with a configuration error while the rest keeps
/// serving.
#[derive(Clone)]
pub struct AppState {
	pub search: Option<SearchService>,
	pub image: Arc<ImagePipeline>,
}

impl AppState {
	pub fn new(search: Option<SearchService>, image: ImagePipeline) -> Self {
		Self {
			search,
			image: Arc::new(image),
		}
	}
}

/// Builds the state from loaded configuration.
pub fn create_app_state(config: &ServerConfig) -> Result<AppState, ServerError> {
	let cse = &config.search.google_cse;

	let search = match (&cse.api_key, &cse.search_engine_id) {
		(Some(api_key), Some(cx)) => {
			let mut client = CseClient::new(api_key.clone(), cx.clone())
				.and_then(|c| c.with_timeout(Duration::from_secs(cse.timeout_secs)))
				.map_err(|e| ServerError::Internal(format!("failed to build search client: {e}")))?
				.with_options(CseOptions {
					safe: cse.safe.clone(),
					gl: cse.gl.clone(),
					hl: cse.hl.clone(),
				});
			if let Some(base_url) = &cse.base_url {
				client = client.with_base_url(base_url.clone());
			}
			tracing::info!(base_url = client.base_url(), "Google CSE search enabled");
			Some(SearchService::new(Arc::new(client)))
		}
		_ => {
			tracing::warn!("Google CSE credentials missing, search will answer with an error");
			None
		}
	};

	let image = &config.image;
	let pipeline = ImagePipeline::new(
		FetchOptions {
			timeout: Duration::from_secs(image.timeout_secs),
			user_agent: image.user_agent.clone(),
			max_source_bytes: image.max_source_bytes,
		},
		ImageLimits {
			max_width: image.max_width,
			default_width: image.default_width,
			default_quality: image.default_quality,
		},
	)
	.map_err(|e| ServerError::Internal(format!("failed to build image pipeline: {e}")))?;

	Ok(AppState::new(search, pipeline))
}

pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/api/search", get(routes::search::search))
		.route("/api/img", get(routes::img::image_proxy))
		.route("/health", get(routes::health::health_check))
		.route("/api/openapi.json", get(routes::docs::openapi_json))
		.with_state(state)
}
