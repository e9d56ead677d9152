// ABOUTME: Core data models for the physiology sandbox
// ABOUTME: Re-exports the state record, field keys and unit mode types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// State record, partial profiles and field keys
pub mod record;
/// Unit modes per quantity family
pub mod units;

pub use record::{FieldValue, PartialRecord, RecordField, Sex, StateRecord};
pub use units::{QuantityFamily, UnitMode, UnitModes};
