// ABOUTME: Core types and constants for the physiology what-if sandbox
// ABOUTME: Foundation crate with error handling, unit constants, and the state record model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Physio Core
//!
//! Foundation crate providing shared types and constants for the physiology
//! sandbox. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion factors, storage keys and history limits
//! - **models**: The state record, its field keys, and unit modes

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (state record, field keys, unit modes)
pub mod models;
