// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Thumbnail proxy HTTP handler.

use axum::{
	extract::{Query, State},
	http::header,
	response::IntoResponse,
};
use receitas_server_api::ImageQuery;

use crate::{
	api::AppState,
	error::ServerError,
	params::{image_query, image_settings, QueryPairs},
};

#[utoipa::path(
    get,
    path = "/api/img",
    params(ImageQuery),
    responses(
        (status = 200, description = "WebP thumbnail", content_type = "image/webp", body = Vec<u8>),
        (status = 400, description = "Missing or invalid source URL", body = receitas_server_api::ErrorResponse),
        (status = 502, description = "Origin answered with an unusable response", body = receitas_server_api::ErrorResponse),
        (status = 500, description = "Fetch or transform failure", body = receitas_server_api::ErrorResponse)
    ),
    tag = "image"
)]
/// GET /api/img - Fetch a remote image and re-encode it as a small WebP.
pub async fn image_proxy(
	State(state): State<AppState>,
	Query(pairs): Query<QueryPairs>,
) -> Result<impl IntoResponse, ServerError> {
	let query = image_query(&pairs);
	let (width, quality) = image_settings(&query, state.image.limits());
	let request = state.image.request(query.url.as_deref(), width, quality)?;
	let image = state.image.process(&request).await?;

	Ok((
		[
			(header::CONTENT_TYPE, image.content_type),
			(header::CACHE_CONTROL, image.cache_control),
		],
		image.bytes,
	))
}
