// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Result windows and the batch plan that covers them.

/// Largest `num` the search provider accepts per call.
pub const UPSTREAM_MAX_PER_CALL: u32 = 10;

/// Highest result rank the provider will ever return for a query.
pub const RESULT_CEILING: u32 = 100;

/// Largest page size a client may request.
pub const PER_PAGE_CAP: u32 = 50;

/// Page size used when the client does not send a usable one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Provider limits that bound a batch plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLimits {
	pub max_per_call: u32,
	pub ceiling: u32,
}

impl Default for BatchLimits {
	fn default() -> Self {
		Self {
			max_per_call: UPSTREAM_MAX_PER_CALL,
			ceiling: RESULT_CEILING,
		}
	}
}

/// One upstream call: `count` results starting at 1-based rank `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRequest {
	pub start: u32,
	pub count: u32,
}

/// The contiguous range of global result ranks a page request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
	page: u32,
	per_page: u32,
	global_start: u32,
}

impl SearchWindow {
	/// Builds a window, flooring `page` at 1 and clamping `per_page` into
	/// `1..=PER_PAGE_CAP`.
	pub fn new(page: u32, per_page: u32) -> Self {
		let page = page.max(1);
		let per_page = per_page.clamp(1, PER_PAGE_CAP);
		let global_start = (page - 1).saturating_mul(per_page).saturating_add(1);

		Self {
			page,
			per_page,
			global_start,
		}
	}

	pub fn page(&self) -> u32 {
		self.page
	}

	pub fn per_page(&self) -> u32 {
		self.per_page
	}

	/// 1-based rank of the first result in this window.
	pub fn global_start(&self) -> u32 {
		self.global_start
	}

	/// True when the window starts past the provider ceiling and therefore
	/// cannot yield any result.
	pub fn is_beyond(&self, limits: BatchLimits) -> bool {
		self.global_start > limits.ceiling
	}

	/// Number of results the window can actually yield under `limits`.
	pub fn effective_count(&self, limits: BatchLimits) -> u32 {
		if self.is_beyond(limits) {
			return 0;
		}
		self.per_page.min(limits.ceiling - (self.global_start - 1))
	}

	/// Computes the batches covering this window, in start order.
	///
	/// Each batch takes `min(max_per_call, remaining, ceiling - (start - 1))`
	/// results. The plan is empty when the window is beyond the ceiling.
	pub fn plan(&self, limits: BatchLimits) -> Vec<BatchRequest> {
		let max_per_call = limits.max_per_call.max(1);
		let mut start = self.global_start;
		let mut remaining = self.effective_count(limits);
		let mut batches = Vec::with_capacity(remaining.div_ceil(max_per_call) as usize);

		while remaining > 0 && start <= limits.ceiling {
			let count = max_per_call
				.min(remaining)
				.min(limits.ceiling - (start - 1));
			batches.push(BatchRequest { start, count });
			start += count;
			remaining -= count;
		}

		batches
	}
}
