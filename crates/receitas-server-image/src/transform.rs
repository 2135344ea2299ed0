// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Decode, shrink and re-encode as lossy WebP.
//!
//! Pure and CPU-bound: callers run it on the blocking pool.

use image::imageops::FilterType;
use image::GenericImageView;

use crate::error::ImageError;

/// Re-encodes `source` as WebP at `quality`, shrinking it to `width` when
/// the source is wider. Narrower sources keep their size.
pub fn transform(source: &[u8], width: u32, quality: u8) -> Result<Vec<u8>, ImageError> {
	let decoded =
		image::load_from_memory(source).map_err(|e| ImageError::Transform(e.to_string()))?;
	let (src_width, src_height) = decoded.dimensions();

	let resized = if src_width > width {
		let height = target_height(src_width, src_height, width);
		decoded.resize_exact(width, height, FilterType::Lanczos3)
	} else {
		decoded
	};

	let rgba = resized.to_rgba8();
	let encoded = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height())
		.encode_simple(false, f32::from(quality))
		.map_err(|e| ImageError::Transform(format!("webp encode: {e:?}")))?;

	Ok(encoded.to_vec())
}

/// Height preserving the source aspect ratio at `width`, never below 1.
pub fn target_height(src_width: u32, src_height: u32, width: u32) -> u32 {
	if src_width == 0 {
		return 1;
	}
	let scaled = (f64::from(src_height) * f64::from(width) / f64::from(src_width)).round();
	(scaled as u32).max(1)
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use image::{ImageBuffer, ImageFormat, Rgb};
	use std::io::Cursor;

	/// A gradient PNG of the given size.
	pub(crate) fn png(width: u32, height: u32) -> Vec<u8> {
		let img = ImageBuffer::from_fn(width, height, |x, y| {
			Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
		});
		let mut out = Cursor::new(Vec::new());
		img.write_to(&mut out, ImageFormat::Png).unwrap();
		out.into_inner()
	}

	fn dimensions(webp_bytes: &[u8]) -> (u32, u32) {
		image::load_from_memory_with_format(webp_bytes, ImageFormat::WebP)
			.unwrap()
			.dimensions()
	}

	#[test]
	fn wide_source_is_shrunk_with_aspect_ratio() {
		let out = transform(&png(1000, 500), 240, 60).unwrap();
		assert_eq!(dimensions(&out), (240, 120));
	}

	#[test]
	fn narrow_source_is_never_enlarged() {
		let out = transform(&png(100, 80), 240, 60).unwrap();
		assert_eq!(dimensions(&out), (100, 80));
	}

	#[test]
	fn output_is_webp() {
		let out = transform(&png(300, 200), 240, 60).unwrap();
		assert_eq!(&out[0..4], b"RIFF");
		assert_eq!(&out[8..12], b"WEBP");
	}

	#[test]
	fn same_input_gives_identical_bytes() {
		let source = png(640, 480);
		let first = transform(&source, 240, 60).unwrap();
		let second = transform(&source, 240, 60).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn garbage_fails_as_transform_error() {
		let err = transform(b"definitely not an image", 240, 60).unwrap_err();
		assert!(matches!(err, ImageError::Transform(_)));
	}

	#[test]
	fn target_height_rounds_and_floors_at_one() {
		assert_eq!(target_height(1000, 500, 240), 120);
		assert_eq!(target_height(3, 2, 2), 1);
		assert_eq!(target_height(10_000, 1, 240), 1);
		assert_eq!(target_height(0, 100, 240), 1);
	}
}
