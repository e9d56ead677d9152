// ABOUTME: Derivation engine for the physiology what-if sandbox
// ABOUTME: Pure functions from a state record and unit modes to metrics, categories and rankings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Physio Intelligence
//!
//! Stateless physiology calculations. Every function takes the state record
//! (and, for glucose and lipid formulas, the active [`UnitModes`]) explicitly;
//! nothing here reads ambient state, so every result is reproducible from its
//! arguments.
//!
//! Non-finite inputs never panic: they flow through the formulas and come
//! out as non-finite values, which the classifiers map to dedicated
//! categories.
//!
//! [`UnitModes`]: physio_core::models::UnitModes

/// Per-metric formulas (body composition, energy, cardiovascular, glycemic, lipids)
pub mod algorithms;

/// Qualitative risk bands with severity tags
pub mod categories;

/// Engine configuration (sensitivity scales, top-N)
pub mod config;

/// Derived metrics vector, the unit of comparison
pub mod derived;

/// Comma/period tolerant numeric parsing
pub mod parsing;

/// Literature constants and clinical thresholds
pub mod physiological_constants;

/// Projected weight trajectory over the horizon
pub mod projection;

/// Normalized-delta ranking between derived vectors
pub mod sensitivity;

/// Unit registry and mg/dL normalization
pub mod units;

pub use categories::{CategoryReport, RiskCategory, Severity};
pub use derived::{derive_vector, DerivedVector, MetricKey};
pub use sensitivity::{compare_snapshots, MetricDelta, SensitivityTracker};
pub use projection::{project_weight, ProjectionPoint};
pub use units::UnitRegistry;
