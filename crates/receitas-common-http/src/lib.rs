// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Receitas.
//!
//! This crate provides:
//! - Pre-configured reqwest client builders with a consistent User-Agent
//! - A generic "bounded operation with deadline" wrapper used for every
//!   upstream call that must not outlive its time budget

mod client;
mod deadline;

pub use client::{builder, builder_with_user_agent, user_agent};
pub use deadline::{with_deadline, DeadlineElapsed};
