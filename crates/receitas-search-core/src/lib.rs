// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search aggregation and pagination for Receitas.
//!
//! A page request is turned into a [`SearchWindow`], the window into a plan of
//! upstream [`BatchRequest`]s bounded by the provider's per-call cap and total
//! result ceiling, the plan is fetched sequentially through a
//! [`SearchProvider`], and the raw items are merged into deduplicated
//! [`SearchResult`]s.

pub mod error;
pub mod merge;
pub mod provider;
pub mod service;
pub mod types;
pub mod window;

pub use error::SearchError;
pub use merge::merge_batches;
pub use provider::{fetch_window, SearchProvider};
pub use service::SearchService;
pub use types::{RawSearchItem, SearchResult};
pub use window::{
	BatchLimits, BatchRequest, SearchWindow, DEFAULT_PER_PAGE, PER_PAGE_CAP, RESULT_CEILING,
	UPSTREAM_MAX_PER_CALL,
};
