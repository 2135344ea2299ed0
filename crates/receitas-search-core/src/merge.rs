// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Merging batch responses into one deduplicated window.

use std::collections::HashSet;

use tracing::trace;

use crate::types::{RawSearchItem, SearchResult};

/// Merges the concatenated items of every batch of a window.
///
/// Malformed items are dropped silently, duplicates are removed by `link`
/// with the first occurrence kept, and arrival order is preserved.
pub fn merge_batches<I>(items: I) -> Vec<SearchResult>
where
	I: IntoIterator<Item = RawSearchItem>,
{
	let mut seen = HashSet::new();
	let mut merged = Vec::new();

	for item in items {
		let Some(result) = item.into_result() else {
			trace!("dropping malformed search item");
			continue;
		};
		if seen.insert(result.link.clone()) {
			merged.push(result);
		}
	}

	merged
}

#[cfg(test)]
mod tests {
	use super::*;

	fn raw(title: &str, link: &str) -> RawSearchItem {
		RawSearchItem {
			title: Some(title.to_string()),
			link: Some(link.to_string()),
			display_link: Some("receitas.example".to_string()),
			image: None,
			thumbnail: None,
		}
	}

	#[test]
	fn keeps_first_occurrence_in_arrival_order() {
		let merged = merge_batches(vec![
			raw("Bolo A", "https://x/a"),
			raw("Bolo B", "https://x/b"),
			raw("Bolo A (dup)", "https://x/a"),
			raw("Bolo C", "https://x/c"),
		]);

		let titles: Vec<_> = merged.iter().map(|r| r.title.as_str()).collect();
		assert_eq!(titles, vec!["Bolo A", "Bolo B", "Bolo C"]);
	}

	#[test]
	fn drops_malformed_items_without_affecting_others() {
		let merged = merge_batches(vec![
			RawSearchItem {
				title: None,
				..raw("", "https://x/no-title")
			},
			raw("Pudim", "https://x/pudim"),
			RawSearchItem::default(),
		]);

		assert_eq!(merged.len(), 1);
		assert_eq!(merged[0].link, "https://x/pudim");
	}

	#[test]
	fn malformed_duplicate_does_not_shadow_valid_item() {
		let merged = merge_batches(vec![
			RawSearchItem {
				display_link: None,
				..raw("Broken", "https://x/a")
			},
			raw("Valid", "https://x/a"),
		]);

		assert_eq!(merged.len(), 1);
		assert_eq!(merged[0].title, "Valid");
	}

	#[test]
	fn merging_with_itself_is_idempotent() {
		let once = merge_batches(vec![
			raw("Bolo", "https://x/bolo"),
			raw("Torta", "https://x/torta"),
			raw("Bolo again", "https://x/bolo"),
		]);

		let doubled = once
			.iter()
			.cloned()
			.chain(once.iter().cloned())
			.map(RawSearchItem::from);
		let twice = merge_batches(doubled);

		assert_eq!(once, twice);
	}

	#[test]
	fn empty_input_yields_empty_output() {
		assert!(merge_batches(Vec::new()).is_empty());
	}
}
