// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request and wire types for the Google CSE API.
//!
//! Google's item objects are loosely shaped: fields go missing, `pagemap`
//! entries vary per site. Every field is decoded leniently, so a value of the
//! wrong JSON type reads as absent instead of failing the whole batch.

use receitas_search_core::{RawSearchItem, UPSTREAM_MAX_PER_CALL};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Parameters for one CSE call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CseBatchRequest {
	pub query: String,
	pub start: u32,
	pub num: u32,
}

impl CseBatchRequest {
	/// `num` is clamped to 1-10 (the API rejects anything else) and `start`
	/// is floored at 1.
	pub fn new(query: impl Into<String>, start: u32, num: u32) -> Self {
		Self {
			query: query.into(),
			start: start.max(1),
			num: num.clamp(1, UPSTREAM_MAX_PER_CALL),
		}
	}
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CseApiResponse {
	#[serde(default, deserialize_with = "lenient_items")]
	pub items: Vec<CseApiItem>,
	#[serde(default, deserialize_with = "lenient")]
	pub error: Option<CseApiError>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CseApiItem {
	#[serde(default, deserialize_with = "lenient")]
	pub title: Option<String>,
	#[serde(default, deserialize_with = "lenient")]
	pub link: Option<String>,
	#[serde(default, rename = "displayLink", deserialize_with = "lenient")]
	pub display_link: Option<String>,
	#[serde(default, deserialize_with = "lenient")]
	pub pagemap: Option<PageMap>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageMap {
	#[serde(default, deserialize_with = "lenient")]
	pub cse_image: Vec<PageMapImage>,
	#[serde(default, deserialize_with = "lenient")]
	pub thumbnail: Vec<PageMapImage>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageMapImage {
	#[serde(default, deserialize_with = "lenient")]
	pub src: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CseApiError {
	pub code: u16,
	#[serde(default)]
	pub message: String,
}

impl From<CseApiItem> for RawSearchItem {
	fn from(item: CseApiItem) -> Self {
		let pagemap = item.pagemap.unwrap_or_default();
		let first_src = |images: Vec<PageMapImage>| images.into_iter().next().and_then(|i| i.src);

		RawSearchItem {
			title: item.title,
			link: item.link,
			display_link: item.display_link,
			image: first_src(pagemap.cse_image),
			thumbnail: first_src(pagemap.thumbnail),
		}
	}
}

/// Decodes `T` if the value has the right shape, otherwise `T::default()`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned + Default,
{
	let value = serde_json::Value::deserialize(deserializer)?;
	Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decodes each array element independently, skipping non-object entries.
fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<CseApiItem>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = serde_json::Value::deserialize(deserializer)?;
	let serde_json::Value::Array(entries) = value else {
		return Ok(Vec::new());
	};

	Ok(entries
		.into_iter()
		.filter_map(|entry| serde_json::from_value(entry).ok())
		.collect())
}
