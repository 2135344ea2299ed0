// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Image proxy configuration section.

use serde::{Deserialize, Serialize};

const DEFAULT_TIMEOUT_SECS: u64 = 8;
const DEFAULT_MAX_WIDTH: u32 = 800;
const DEFAULT_WIDTH: u32 = 240;
const DEFAULT_QUALITY: u8 = 60;
const DEFAULT_MAX_SOURCE_BYTES: u64 = 15 * 1024 * 1024;
const DEFAULT_USER_AGENT: &str = "BrasilReceitasBot/1.0 (+img-proxy)";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageConfigLayer {
	pub timeout_secs: Option<u64>,
	pub max_width: Option<u32>,
	pub default_width: Option<u32>,
	pub default_quality: Option<u8>,
	pub max_source_bytes: Option<u64>,
	pub user_agent: Option<String>,
}

impl ImageConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
		if other.max_width.is_some() {
			self.max_width = other.max_width;
		}
		if other.default_width.is_some() {
			self.default_width = other.default_width;
		}
		if other.default_quality.is_some() {
			self.default_quality = other.default_quality;
		}
		if other.max_source_bytes.is_some() {
			self.max_source_bytes = other.max_source_bytes;
		}
		if other.user_agent.is_some() {
			self.user_agent = other.user_agent;
		}
	}

	pub fn finalize(self) -> ImageConfig {
		ImageConfig {
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
			max_width: self.max_width.unwrap_or(DEFAULT_MAX_WIDTH),
			default_width: self.default_width.unwrap_or(DEFAULT_WIDTH),
			default_quality: self.default_quality.unwrap_or(DEFAULT_QUALITY),
			max_source_bytes: self.max_source_bytes.unwrap_or(DEFAULT_MAX_SOURCE_BYTES),
			user_agent: self
				.user_agent
				.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageConfig {
	/// Deadline for the upstream fetch, headers and body.
	pub timeout_secs: u64,
	pub max_width: u32,
	pub default_width: u32,
	pub default_quality: u8,
	pub max_source_bytes: u64,
	pub user_agent: String,
}

impl Default for ImageConfig {
	fn default() -> Self {
		ImageConfigLayer::default().finalize()
	}
}

impl ImageConfig {
	/// Cross-field rules: positive timeout and width bounds, defaults inside
	/// their ranges.
	pub fn validate(&self) -> Result<(), String> {
		if self.timeout_secs == 0 {
			return Err("image.timeout_secs must be positive".to_string());
		}
		if self.max_width == 0 {
			return Err("image.max_width must be positive".to_string());
		}
		if self.default_width == 0 || self.default_width > self.max_width {
			return Err(format!(
				"image.default_width ({}) must be between 1 and image.max_width ({})",
				self.default_width, self.max_width
			));
		}
		if !(1..=100).contains(&self.default_quality) {
			return Err(format!(
				"image.default_quality ({}) must be between 1 and 100",
				self.default_quality
			));
		}
		if self.max_source_bytes == 0 {
			return Err("image.max_source_bytes must be positive".to_string());
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn defaults_match_card_thumbnails() {
		let config = ImageConfig::default();
		assert_eq!(config.timeout_secs, 8);
		assert_eq!(config.max_width, 800);
		assert_eq!(config.default_width, 240);
		assert_eq!(config.default_quality, 60);
		assert_eq!(config.max_source_bytes, 15 * 1024 * 1024);
		assert_eq!(config.user_agent, "BrasilReceitasBot/1.0 (+img-proxy)");
		assert!(config.validate().is_ok());
	}

	#[test]
	fn default_width_above_max_is_rejected() {
		let config = ImageConfig {
			default_width: 900,
			..ImageConfig::default()
		};
		assert!(config.validate().unwrap_err().contains("default_width"));
	}

	#[test]
	fn quality_out_of_range_is_rejected() {
		for quality in [0, 101] {
			let config = ImageConfig {
				default_quality: quality,
				..ImageConfig::default()
			};
			assert!(config.validate().is_err(), "{quality}");
		}
	}

	#[test]
	fn zero_timeout_is_rejected() {
		let config = ImageConfig {
			timeout_secs: 0,
			..ImageConfig::default()
		};
		assert!(config.validate().is_err());
	}

	#[test]
	fn merge_overwrites_only_set_fields() {
		let mut base = ImageConfigLayer {
			max_width: Some(640),
			default_width: Some(320),
			..Default::default()
		};
		base.merge(ImageConfigLayer {
			default_width: Some(200),
			..Default::default()
		});
		assert_eq!(base.max_width, Some(640));
		assert_eq!(base.default_width, Some(200));
	}

	proptest! {
		#[test]
		fn widths_within_max_validate(max_width in 1u32..5000, frac in 0.0f64..=1.0, quality in 1u8..=100) {
			let default_width = ((f64::from(max_width) * frac) as u32).clamp(1, max_width);
			let config = ImageConfig {
				max_width,
				default_width,
				default_quality: quality,
				..ImageConfig::default()
			};
			prop_assert!(config.validate().is_ok());
		}
	}
}
