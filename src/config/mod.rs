// ABOUTME: Configuration management for the sandbox process
// ABOUTME: Re-exports the environment configuration and the engine's configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: storage location, history depth and logging from environment variables
//! - **Sensitivity**: normalisation scales and top-N, owned by the engine crate

/// Environment configuration
pub mod environment;

pub use environment::{SandboxConfig, HISTORY_LIMIT_ENV, STORAGE_DIR_ENV};
pub use physio_intelligence::config::{ConfigError, MetricScales, SensitivityConfig};
