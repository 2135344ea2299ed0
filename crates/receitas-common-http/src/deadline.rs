// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Bounded operations with a deadline.
//!
//! [`with_deadline`] races a future against a timer. When the timer wins the
//! future is dropped, which for reqwest aborts the in-flight request and
//! releases the connection. Nothing produced by the abandoned future is
//! observable afterwards.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

/// The wrapped operation did not finish within its budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation exceeded its {}ms deadline", .budget.as_millis())]
pub struct DeadlineElapsed {
	pub budget: Duration,
}

/// Run `fut` to completion or cancel it once `budget` has passed.
pub async fn with_deadline<F, T>(budget: Duration, fut: F) -> Result<T, DeadlineElapsed>
where
	F: Future<Output = T>,
{
	match tokio::time::timeout(budget, fut).await {
		Ok(value) => Ok(value),
		Err(_) => {
			warn!(budget_ms = budget.as_millis() as u64, "deadline elapsed, operation cancelled");
			Err(DeadlineElapsed { budget })
		}
	}
}
