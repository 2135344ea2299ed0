// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Recipe search HTTP handler.

use axum::{
	extract::{Query, State},
	Json,
};
use receitas_server_api::{SearchQuery, SearchResponse};

use crate::{
	api::AppState,
	error::ServerError,
	params::{search_query, QueryPairs, SearchParams},
};

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Deduplicated results for the requested page", body = SearchResponse),
        (status = 500, description = "Credentials missing or provider failure", body = receitas_server_api::ErrorResponse)
    ),
    tag = "search"
)]
/// GET /api/search - One page of recipe results.
pub async fn search(
	State(state): State<AppState>,
	Query(pairs): Query<QueryPairs>,
) -> Result<Json<SearchResponse>, ServerError> {
	let params = SearchParams::from_query(&search_query(&pairs));

	if params.query.is_empty() {
		tracing::debug!("search: blank query");
		return Ok(Json(SearchResponse::empty()));
	}

	let service = state.search.as_ref().ok_or_else(|| {
		tracing::error!("search: provider credentials are not configured");
		ServerError::MissingCredentials
	})?;

	let items = service.search(&params.query, params.window).await?;

	tracing::info!(
		query = %params.query,
		page = params.window.page(),
		per_page = params.window.per_page(),
		results_count = items.len(),
		"search: returning results"
	);

	Ok(Json(SearchResponse { items }))
}
