// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Custom Search Engine client for Receitas.
//!
//! [`CseClient`] fetches one batch of results per call and implements
//! [`receitas_search_core::SearchProvider`], so the search service can fan a
//! page request out over several CSE calls.

pub mod client;
pub mod error;
pub mod types;

pub use client::{CseClient, CseOptions, DEFAULT_BASE_URL};
pub use error::CseError;
pub use types::CseBatchRequest;
