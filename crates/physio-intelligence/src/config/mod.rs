// ABOUTME: Configuration module for the physio-intelligence crate
// ABOUTME: Re-exports the configuration error type and sensitivity settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error type
pub mod error;

/// Sensitivity ranking configuration (normalization scales, top-N)
pub mod sensitivity;

pub use error::ConfigError;
pub use sensitivity::{MetricScales, SensitivityConfig};
