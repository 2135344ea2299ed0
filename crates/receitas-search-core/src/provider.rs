// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search provider seam and the sequential fan-out fold.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::types::RawSearchItem;
use crate::window::BatchRequest;

/// An upstream search engine that can answer one batch at a time.
#[async_trait]
pub trait SearchProvider: Send + Sync {
	/// Short provider name for logs.
	fn name(&self) -> &'static str;

	/// Fetches `batch.count` results for `query` starting at `batch.start`.
	async fn fetch_batch(
		&self,
		query: &str,
		batch: BatchRequest,
	) -> Result<Vec<RawSearchItem>, SearchError>;
}

/// Fetches every batch of `plan` in order and concatenates the items.
///
/// Stops early when a batch comes back empty (the provider has no more
/// results). The first failing batch aborts the window.
pub async fn fetch_window(
	provider: &dyn SearchProvider,
	query: &str,
	plan: &[BatchRequest],
) -> Result<Vec<RawSearchItem>, SearchError> {
	let mut items = Vec::new();

	for batch in plan {
		let fetched = provider.fetch_batch(query, *batch).await.map_err(|e| {
			warn!(
				provider = provider.name(),
				start = batch.start,
				count = batch.count,
				error = %e,
				"batch failed, aborting window"
			);
			e
		})?;

		if fetched.is_empty() {
			debug!(
				provider = provider.name(),
				start = batch.start,
				"empty batch, no more results"
			);
			break;
		}

		items.extend(fetched);
	}

	Ok(items)
}
