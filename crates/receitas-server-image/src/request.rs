// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Validated image proxy requests.

use url::Url;

use crate::error::ImageError;

pub const MAX_WIDTH: u32 = 800;
/// Sized for result cards (about 120 CSS px at 2x).
pub const DEFAULT_WIDTH: u32 = 240;
pub const DEFAULT_QUALITY: u8 = 60;

/// Width and quality bounds applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageLimits {
	pub max_width: u32,
	pub default_width: u32,
	pub default_quality: u8,
}

impl Default for ImageLimits {
	fn default() -> Self {
		Self {
			max_width: MAX_WIDTH,
			default_width: DEFAULT_WIDTH,
			default_quality: DEFAULT_QUALITY,
		}
	}
}

/// A source URL known to be absolute http(s), plus clamped output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
	source: Url,
	width: u32,
	quality: u8,
}

impl ImageRequest {
	/// Validates `raw_url` and clamps `width` into `[1, max_width]` and
	/// `quality` into `[1, 100]`.
	pub fn parse(
		raw_url: Option<&str>,
		width: u32,
		quality: u32,
		limits: ImageLimits,
	) -> Result<Self, ImageError> {
		let source = validate_source_url(raw_url)?;
		Ok(Self {
			source,
			width: width.clamp(1, limits.max_width.max(1)),
			quality: quality.clamp(1, 100) as u8,
		})
	}

	pub fn source(&self) -> &Url {
		&self.source
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn quality(&self) -> u8 {
		self.quality
	}
}

/// Checks that `raw` is present, parses as an absolute URL and uses the
/// `http` or `https` scheme.
pub fn validate_source_url(raw: Option<&str>) -> Result<Url, ImageError> {
	let raw = match raw {
		Some(raw) if !raw.is_empty() => raw,
		_ => return Err(ImageError::MissingUrl),
	};

	let url = Url::parse(raw).map_err(|_| ImageError::InvalidUrl)?;
	match url.scheme() {
		"http" | "https" => Ok(url),
		_ => Err(ImageError::UnsupportedScheme),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn missing_or_empty_url() {
		assert_eq!(validate_source_url(None), Err(ImageError::MissingUrl));
		assert_eq!(validate_source_url(Some("")), Err(ImageError::MissingUrl));
	}

	#[test]
	fn relative_or_garbage_url_is_invalid() {
		assert_eq!(
			validate_source_url(Some("/img/bolo.jpg")),
			Err(ImageError::InvalidUrl)
		);
		assert_eq!(
			validate_source_url(Some("not a url")),
			Err(ImageError::InvalidUrl)
		);
	}

	#[test]
	fn only_http_schemes_are_allowed() {
		for raw in ["ftp://x/a.png", "file:///etc/passwd", "data:image/png;base64,AAAA"] {
			assert_eq!(
				validate_source_url(Some(raw)),
				Err(ImageError::UnsupportedScheme),
				"{raw}"
			);
		}
		assert!(validate_source_url(Some("http://x/a.png")).is_ok());
		assert!(validate_source_url(Some("https://x/a.png")).is_ok());
	}

	#[test]
	fn width_and_quality_are_clamped() {
		let limits = ImageLimits::default();
		let request = ImageRequest::parse(Some("https://x/a.jpg"), 5000, 0, limits).unwrap();
		assert_eq!(request.width(), 800);
		assert_eq!(request.quality(), 1);

		let request = ImageRequest::parse(Some("https://x/a.jpg"), 0, 500, limits).unwrap();
		assert_eq!(request.width(), 1);
		assert_eq!(request.quality(), 100);
	}

	#[test]
	fn configured_max_width_applies() {
		let limits = ImageLimits {
			max_width: 320,
			..ImageLimits::default()
		};
		let request = ImageRequest::parse(Some("https://x/a.jpg"), 640, 60, limits).unwrap();
		assert_eq!(request.width(), 320);
	}

	proptest! {
		#[test]
		fn clamped_values_stay_in_range(width in any::<u32>(), quality in any::<u32>()) {
			let request = ImageRequest::parse(
				Some("https://receitas.example/a.jpg"),
				width,
				quality,
				ImageLimits::default(),
			).unwrap();
			prop_assert!((1..=MAX_WIDTH).contains(&request.width()));
			prop_assert!((1..=100).contains(&request.quality()));
		}
	}
}
