// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Search result types.

use serde::{Deserialize, Serialize};

/// A validated search hit as returned to clients.
///
/// `link` is the identity key: a window never contains two results with the
/// same link.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
	pub title: String,
	pub link: String,
	pub display_link: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
}

/// An upstream item before shape validation.
///
/// Providers fill what they found; a field that was missing or had the wrong
/// JSON type upstream is `None` here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSearchItem {
	pub title: Option<String>,
	pub link: Option<String>,
	pub display_link: Option<String>,
	/// Primary image candidate.
	pub image: Option<String>,
	/// Fallback image candidate.
	pub thumbnail: Option<String>,
}

impl RawSearchItem {
	/// Validates the minimal shape and resolves the image fallback chain.
	///
	/// Returns `None` when `title`, `link` or `display_link` is absent.
	pub fn into_result(self) -> Option<SearchResult> {
		let image = [self.image, self.thumbnail]
			.into_iter()
			.flatten()
			.find(|candidate| !candidate.is_empty());

		Some(SearchResult {
			title: self.title?,
			link: self.link?,
			display_link: self.display_link?,
			image,
		})
	}
}

impl From<SearchResult> for RawSearchItem {
	fn from(result: SearchResult) -> Self {
		Self {
			title: Some(result.title),
			link: Some(result.link),
			display_link: Some(result.display_link),
			image: result.image,
			thumbnail: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item() -> RawSearchItem {
		RawSearchItem {
			title: Some("Bolo de cenoura".to_string()),
			link: Some("https://receitas.example/bolo".to_string()),
			display_link: Some("receitas.example".to_string()),
			image: None,
			thumbnail: None,
		}
	}

	#[test]
	fn complete_item_becomes_result() {
		let result = item().into_result().unwrap();
		assert_eq!(result.title, "Bolo de cenoura");
		assert_eq!(result.link, "https://receitas.example/bolo");
		assert_eq!(result.display_link, "receitas.example");
		assert_eq!(result.image, None);
	}

	#[test]
	fn missing_required_field_is_rejected() {
		assert!(RawSearchItem { title: None, ..item() }.into_result().is_none());
		assert!(RawSearchItem { link: None, ..item() }.into_result().is_none());
		assert!(RawSearchItem {
			display_link: None,
			..item()
		}
		.into_result()
		.is_none());
	}

	#[test]
	fn primary_image_wins_over_thumbnail() {
		let result = RawSearchItem {
			image: Some("https://img.example/full.jpg".to_string()),
			thumbnail: Some("https://img.example/thumb.jpg".to_string()),
			..item()
		}
		.into_result()
		.unwrap();
		assert_eq!(result.image.as_deref(), Some("https://img.example/full.jpg"));
	}

	#[test]
	fn empty_primary_image_falls_back_to_thumbnail() {
		let result = RawSearchItem {
			image: Some(String::new()),
			thumbnail: Some("https://img.example/thumb.jpg".to_string()),
			..item()
		}
		.into_result()
		.unwrap();
		assert_eq!(result.image.as_deref(), Some("https://img.example/thumb.jpg"));
	}

	#[test]
	fn serializes_camel_case_and_omits_missing_image() {
		let json = serde_json::to_value(item().into_result().unwrap()).unwrap();
		assert_eq!(json["displayLink"], "receitas.example");
		assert!(json.get("image").is_none());
		assert!(json.get("display_link").is_none());
	}
}
