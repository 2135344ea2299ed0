// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod http;
mod image;
mod logging;
mod search;

pub use http::{HttpConfig, HttpConfigLayer};
pub use image::{ImageConfig, ImageConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use search::{GoogleCseConfig, GoogleCseConfigLayer, SearchConfig, SearchConfigLayer};
