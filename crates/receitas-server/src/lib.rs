// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Receitas HTTP server.
//!
//! Serves recipe search over a configured search provider and a thumbnail
//! proxy that shrinks remote recipe photos to WebP.

pub mod api;
pub mod api_docs;
pub mod error;
pub mod params;
pub mod routes;
pub mod version;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use error::ServerError;
pub use receitas_server_config::ServerConfig;
