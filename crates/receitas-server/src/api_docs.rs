// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI documentation for receitas-server.
//!
//! The raw JSON document is served at `/api/openapi.json`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Receitas Server API",
        version = "1.0.0",
        description = "Recipe search over Google Custom Search and a WebP thumbnail proxy for recipe photos.",
        license(name = "Proprietary")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "search", description = "Paginated, deduplicated recipe search"),
        (name = "image", description = "Remote image fetch, resize and WebP re-encode"),
        (name = "health", description = "Configuration-level health report")
    ),
    paths(
        crate::routes::search::search,
        crate::routes::img::image_proxy,
        crate::routes::health::health_check,
    ),
    components(schemas(
        receitas_server_api::ErrorResponse,
        receitas_server_api::SearchResponse,
        receitas_server_api::SearchResult,
        receitas_server_api::HealthResponse,
        receitas_server_api::HealthStatus,
        receitas_server_api::ComponentsHealth,
        receitas_server_api::GoogleCseHealth,
        receitas_server_api::ImageProxyHealth,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn document_has_all_paths_and_tags() {
		let doc = ApiDoc::openapi();
		let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
		assert_eq!(paths, vec!["/api/img", "/api/search", "/health"]);

		let tags: Vec<_> = doc
			.tags
			.unwrap_or_default()
			.into_iter()
			.map(|t| t.name)
			.collect();
		assert!(tags.contains(&"search".to_string()));
	}

	#[test]
	fn search_parameters_are_documented() {
		let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
		let params = json["paths"]["/api/search"]["get"]["parameters"]
			.as_array()
			.unwrap();
		let names: Vec<_> = params.iter().filter_map(|p| p["name"].as_str()).collect();
		assert_eq!(names, vec!["q", "page", "perPage"]);
	}
}
