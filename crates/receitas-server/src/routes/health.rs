// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, Json};
use receitas_server_api::{
	ComponentsHealth, GoogleCseHealth, HealthResponse, HealthStatus, ImageProxyHealth,
};

use crate::{api::AppState, version};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up; degraded when search is unconfigured", body = HealthResponse)
    ),
    tag = "health"
)]
/// GET /health - Configuration-level health report.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
	let configured = state.search.is_some();
	let status = if configured {
		HealthStatus::Healthy
	} else {
		HealthStatus::Degraded
	};

	let timeout_ms =
		u64::try_from(state.image.fetch_options().timeout.as_millis()).unwrap_or(u64::MAX);

	Json(HealthResponse {
		status,
		timestamp: chrono::Utc::now(),
		version: version::VERSION.to_string(),
		components: ComponentsHealth {
			google_cse: GoogleCseHealth { configured },
			image_proxy: ImageProxyHealth {
				max_width: state.image.limits().max_width,
				timeout_ms,
			},
		},
	})
}
