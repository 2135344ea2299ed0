// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Image proxy pipeline for Receitas.
//!
//! Recipe sites serve full-size photos; result cards only need a small
//! thumbnail. [`ImagePipeline`] validates the requested source, fetches it
//! under a deadline, checks that it really is an image, shrinks it to the
//! requested width and re-encodes it as lossy WebP.

pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod request;
pub mod transform;

pub use error::ImageError;
pub use fetch::{FetchOptions, FetchedImage, ImageFetcher, ACCEPT_IMAGES};
pub use pipeline::{ImagePipeline, Stage, TransformedImage, CACHE_CONTROL, CONTENT_TYPE_WEBP};
pub use request::{ImageLimits, ImageRequest, DEFAULT_QUALITY, DEFAULT_WIDTH, MAX_WIDTH};
pub use transform::{target_height, transform};
