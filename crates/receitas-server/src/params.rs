// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Query parameter normalization.
//!
//! Numeric parameters never fail a request: anything that does not read as
//! a finite number falls back to its default, fractions are floored and the
//! result is floored at 1. Upper bounds are applied by the consumers
//! ([`SearchWindow`] and [`ImageRequest`](receitas_server_image::ImageRequest)).

use receitas_search_core::{SearchWindow, DEFAULT_PER_PAGE};
use receitas_server_api::{ImageQuery, SearchQuery};
use receitas_server_image::ImageLimits;

const DEFAULT_PAGE: u32 = 1;

/// Query string pairs in arrival order, as extracted by the handlers.
pub type QueryPairs = Vec<(String, String)>;

/// Value of the first `key` pair. Later repeats are ignored.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
	pairs
		.iter()
		.find(|(k, _)| k == key)
		.map(|(_, v)| v.clone())
}

pub fn search_query(pairs: &[(String, String)]) -> SearchQuery {
	SearchQuery {
		q: first_value(pairs, "q"),
		page: first_value(pairs, "page"),
		per_page: first_value(pairs, "perPage"),
	}
}

pub fn image_query(pairs: &[(String, String)]) -> ImageQuery {
	ImageQuery {
		url: first_value(pairs, "url"),
		w: first_value(pairs, "w"),
		q: first_value(pairs, "q"),
	}
}

/// Reads a positive count from a raw parameter.
///
/// `None`, blank, non-numeric, NaN and infinite input yield `default`.
pub fn positive_count(raw: Option<&str>, default: u32) -> u32 {
	let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
		return default;
	};

	match raw.parse::<f64>() {
		Ok(value) if value.is_finite() => {
			// `as` saturates, so huge values land on u32::MAX.
			(value.floor().max(1.0)) as u32
		}
		_ => default,
	}
}

/// A search request after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
	/// Trimmed query text; empty means "no search".
	pub query: String,
	pub window: SearchWindow,
}

impl SearchParams {
	pub fn from_query(query: &SearchQuery) -> Self {
		let page = positive_count(query.page.as_deref(), DEFAULT_PAGE);
		let per_page = positive_count(query.per_page.as_deref(), DEFAULT_PER_PAGE);

		Self {
			query: query.q.as_deref().unwrap_or_default().trim().to_string(),
			window: SearchWindow::new(page, per_page),
		}
	}
}

/// Width and quality for an image request, defaults taken from `limits`.
pub fn image_settings(query: &ImageQuery, limits: ImageLimits) -> (u32, u32) {
	let width = positive_count(query.w.as_deref(), limits.default_width);
	let quality = positive_count(query.q.as_deref(), u32::from(limits.default_quality));
	(width, quality)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn search(q: Option<&str>, page: Option<&str>, per_page: Option<&str>) -> SearchParams {
		SearchParams::from_query(&SearchQuery {
			q: q.map(String::from),
			page: page.map(String::from),
			per_page: per_page.map(String::from),
		})
	}

	#[test]
	fn missing_values_use_defaults() {
		let params = search(Some("bolo"), None, None);
		assert_eq!(params.window.page(), 1);
		assert_eq!(params.window.per_page(), 10);
	}

	#[test]
	fn malformed_values_use_defaults() {
		let params = search(Some("bolo"), Some("abc"), Some("NaN"));
		assert_eq!(params.window.page(), 1);
		assert_eq!(params.window.per_page(), 10);

		let params = search(Some("bolo"), Some("Infinity"), Some(""));
		assert_eq!(params.window.page(), 1);
		assert_eq!(params.window.per_page(), 10);
	}

	#[test]
	fn fractions_are_floored_and_values_clamped() {
		let params = search(Some("bolo"), Some("2.9"), Some("75.5"));
		assert_eq!(params.window.page(), 2);
		assert_eq!(params.window.per_page(), 50);

		let params = search(Some("bolo"), Some("-3"), Some("0.5"));
		assert_eq!(params.window.page(), 1);
		assert_eq!(params.window.per_page(), 1);
	}

	#[test]
	fn query_is_trimmed() {
		assert_eq!(search(Some("  pão de queijo \n"), None, None).query, "pão de queijo");
		assert!(search(Some("   "), None, None).query.is_empty());
		assert!(search(None, None, None).query.is_empty());
	}

	#[test]
	fn image_defaults_come_from_limits() {
		let limits = ImageLimits {
			max_width: 800,
			default_width: 320,
			default_quality: 75,
		};
		assert_eq!(image_settings(&ImageQuery::default(), limits), (320, 75));

		let query = ImageQuery {
			url: None,
			w: Some("abc".to_string()),
			q: Some("99.9".to_string()),
		};
		assert_eq!(image_settings(&query, limits), (320, 99));
	}

	fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
		raw.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn repeated_keys_keep_the_first_value() {
		let query = search_query(&pairs(&[
			("q", "bolo"),
			("page", "abc"),
			("perPage", "20"),
			("page", "3"),
			("perPage", "5"),
			("q", "torta"),
		]));
		assert_eq!(query.q.as_deref(), Some("bolo"));
		assert_eq!(query.page.as_deref(), Some("abc"));
		assert_eq!(query.per_page.as_deref(), Some("20"));

		let params = SearchParams::from_query(&query);
		assert_eq!(params.window.page(), 1);
		assert_eq!(params.window.per_page(), 20);
	}

	#[test]
	fn image_pairs_ignore_unknown_and_repeated_keys() {
		let query = image_query(&pairs(&[
			("w", "120"),
			("url", "https://receitas.example/a.jpg"),
			("w", "700"),
			("utm_source", "x"),
			("url", "ftp://receitas.example/b.jpg"),
		]));
		assert_eq!(query.url.as_deref(), Some("https://receitas.example/a.jpg"));
		assert_eq!(query.w.as_deref(), Some("120"));
		assert_eq!(query.q, None);
	}

	#[test]
	fn per_page_key_is_case_sensitive() {
		let query = search_query(&pairs(&[("q", "bolo"), ("per_page", "30")]));
		assert_eq!(query.per_page, None);
	}

	#[test]
	fn huge_values_saturate() {
		assert_eq!(positive_count(Some("1e30"), 10), u32::MAX);
	}

	proptest! {
		/// Any string yields a count of at least 1 and never panics.
		#[test]
		fn count_is_always_positive(raw in "\\PC*", default in 1u32..1000) {
			prop_assert!(positive_count(Some(&raw), default) >= 1);
		}

		/// Integers in range pass through untouched.
		#[test]
		fn integers_pass_through(n in 1u32..1_000_000) {
			prop_assert_eq!(positive_count(Some(&n.to_string()), 10), n);
		}

		/// Fractional input is truncated toward negative infinity.
		#[test]
		fn fractions_floor(n in 1u32..100_000, frac in 0.0f64..0.99) {
			let raw = format!("{}", f64::from(n) + frac);
			prop_assert_eq!(positive_count(Some(&raw), 10), n);
		}
	}
}
