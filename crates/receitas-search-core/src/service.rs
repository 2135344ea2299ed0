// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Window search: plan, fetch, merge.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::error::SearchError;
use crate::merge::merge_batches;
use crate::provider::{fetch_window, SearchProvider};
use crate::types::SearchResult;
use crate::window::{BatchLimits, SearchWindow};

/// Answers page requests against one configured provider.
///
/// Constructed once at startup with the provider (and thus its credentials)
/// injected; holds no per-request state.
#[derive(Clone)]
pub struct SearchService {
	provider: Arc<dyn SearchProvider>,
	limits: BatchLimits,
}

impl SearchService {
	pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
		Self {
			provider,
			limits: BatchLimits::default(),
		}
	}

	pub fn with_limits(mut self, limits: BatchLimits) -> Self {
		self.limits = limits;
		self
	}

	pub fn provider_name(&self) -> &'static str {
		self.provider.name()
	}

	/// Returns the deduplicated results for `window`.
	///
	/// A window past the provider ceiling returns an empty list without any
	/// upstream call.
	#[instrument(skip(self), fields(provider = self.provider.name(), page = window.page(), per_page = window.per_page()))]
	pub async fn search(
		&self,
		query: &str,
		window: SearchWindow,
	) -> Result<Vec<SearchResult>, SearchError> {
		if window.is_beyond(self.limits) {
			debug!(
				global_start = window.global_start(),
				ceiling = self.limits.ceiling,
				"window beyond provider ceiling"
			);
			return Ok(Vec::new());
		}

		let plan = window.plan(self.limits);
		debug!(batches = plan.len(), "fetching window");

		let raw = fetch_window(self.provider.as_ref(), query, &plan).await?;
		let fetched = raw.len();
		let results = merge_batches(raw);

		info!(fetched, returned = results.len(), "search window complete");
		Ok(results)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::provider::tests::{items, ScriptedProvider};
	use crate::window::BatchRequest;

	#[tokio::test]
	async fn beyond_ceiling_makes_no_upstream_call() {
		let provider = Arc::new(ScriptedProvider::new(vec![Ok(items("x", 10))]));
		let service = SearchService::new(provider.clone());

		let results = service
			.search("bolo", SearchWindow::new(3, 50))
			.await
			.unwrap();

		assert!(results.is_empty());
		assert_eq!(provider.call_count(), 0);
	}

	#[tokio::test]
	async fn ten_distinct_items_come_back_intact() {
		let provider = Arc::new(ScriptedProvider::new(vec![Ok(items("bolo", 10))]));
		let service = SearchService::new(provider.clone());

		let results = service
			.search("bolo de cenoura", SearchWindow::new(1, 10))
			.await
			.unwrap();

		assert_eq!(results.len(), 10);
		let mut links: Vec<_> = results.iter().map(|r| r.link.clone()).collect();
		links.sort();
		links.dedup();
		assert_eq!(links.len(), 10);
		assert_eq!(
			provider.calls.lock().unwrap().clone(),
			vec![BatchRequest { start: 1, count: 10 }]
		);
	}

	#[tokio::test]
	async fn duplicates_across_batches_are_removed() {
		let mut second = items("b", 9);
		second.push(items("a", 1).remove(0));
		let provider = Arc::new(ScriptedProvider::new(vec![Ok(items("a", 10)), Ok(second)]));
		let service = SearchService::new(provider);

		let results = service
			.search("bolo", SearchWindow::new(1, 20))
			.await
			.unwrap();

		assert_eq!(results.len(), 19);
	}

	#[tokio::test]
	async fn custom_limits_shape_the_plan() {
		let provider = Arc::new(ScriptedProvider::new(vec![
			Ok(items("a", 5)),
			Ok(items("b", 5)),
		]));
		let service = SearchService::new(provider.clone()).with_limits(BatchLimits {
			max_per_call: 5,
			ceiling: 10,
		});

		service
			.search("bolo", SearchWindow::new(1, 20))
			.await
			.unwrap();

		assert_eq!(
			provider.calls.lock().unwrap().clone(),
			vec![
				BatchRequest { start: 1, count: 5 },
				BatchRequest { start: 6, count: 5 },
			]
		);
	}

	#[tokio::test]
	async fn provider_error_propagates() {
		let provider = Arc::new(ScriptedProvider::new(vec![Err(SearchError::Timeout)]));
		let service = SearchService::new(provider);

		let err = service
			.search("bolo", SearchWindow::new(1, 10))
			.await
			.unwrap_err();
		assert_eq!(err, SearchError::Timeout);
	}
}
