// ABOUTME: Unit registry for glucose and lipid families with in-place record conversion
// ABOUTME: Also normalizes stored values to mg/dL for formulas that are defined in mg/dL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit registry
//!
//! Stored glucose and lipid values are always expressed in the active mode of
//! their family. Switching a mode rewrites the stored values using fixed
//! per-field factors; formulas that are defined in mg/dL normalize on the way in.

use physio_core::constants::units::{
    CHOLESTEROL_MG_PER_MMOL, GLUCOSE_MG_PER_MMOL, TRIGLYCERIDES_MG_PER_MMOL,
};
use physio_core::errors::AppResult;
use physio_core::models::{QuantityFamily, RecordField, StateRecord, UnitMode, UnitModes};
use tracing::debug;

/// mg/dL → mmol/L
#[must_use]
pub fn mgdl_to_mmol(mg: f64, factor: f64) -> f64 {
    mg / factor
}

/// mmol/L → mg/dL
#[must_use]
pub fn mmol_to_mgdl(mmol: f64, factor: f64) -> f64 {
    mmol * factor
}

/// Convert `value` stored in `mode` to mg/dL
#[must_use]
pub fn to_mgdl(value: f64, mode: UnitMode, factor: f64) -> f64 {
    match mode {
        UnitMode::Mg => value,
        UnitMode::Mmol => mmol_to_mgdl(value, factor),
    }
}

/// Convert a mg/dL value into `mode`
#[must_use]
pub fn from_mgdl(mg: f64, mode: UnitMode, factor: f64) -> f64 {
    match mode {
        UnitMode::Mg => mg,
        UnitMode::Mmol => mgdl_to_mmol(mg, factor),
    }
}

/// Rewrite every field of `family` in `record` from `from` into `to`
///
/// No-op when both modes are equal.
///
/// # Errors
///
/// Returns `InvalidInput` if a converted value is not finite; `record` is
/// left unchanged.
pub fn convert_family(
    record: &mut StateRecord,
    family: QuantityFamily,
    from: UnitMode,
    to: UnitMode,
) -> AppResult<()> {
    if from == to {
        return Ok(());
    }
    let convert = |value: f64, factor: f64| from_mgdl(to_mgdl(value, from, factor), to, factor);
    let converted = match family {
        QuantityFamily::Glucose => vec![(
            RecordField::Glucose,
            convert(record.glucose, GLUCOSE_MG_PER_MMOL),
        )],
        QuantityFamily::Lipids => vec![
            (RecordField::Tc, convert(record.tc, CHOLESTEROL_MG_PER_MMOL)),
            (RecordField::Hdl, convert(record.hdl, CHOLESTEROL_MG_PER_MMOL)),
            (RecordField::Tg, convert(record.tg, TRIGLYCERIDES_MG_PER_MMOL)),
        ],
    };

    let mut next = record.clone();
    for (field, value) in converted {
        next.apply(field, value.into())?;
    }
    *record = next;
    Ok(())
}

/// Fasting glucose in mg/dL regardless of the active mode
#[must_use]
pub fn glucose_mgdl(record: &StateRecord, units: UnitModes) -> f64 {
    to_mgdl(record.glucose, units.glucose, GLUCOSE_MG_PER_MMOL)
}

/// Total cholesterol in mg/dL regardless of the active mode
#[must_use]
pub fn tc_mgdl(record: &StateRecord, units: UnitModes) -> f64 {
    to_mgdl(record.tc, units.lipids, CHOLESTEROL_MG_PER_MMOL)
}

/// HDL in mg/dL regardless of the active mode
#[must_use]
pub fn hdl_mgdl(record: &StateRecord, units: UnitModes) -> f64 {
    to_mgdl(record.hdl, units.lipids, CHOLESTEROL_MG_PER_MMOL)
}

/// Triglycerides in mg/dL regardless of the active mode
#[must_use]
pub fn tg_mgdl(record: &StateRecord, units: UnitModes) -> f64 {
    to_mgdl(record.tg, units.lipids, TRIGLYCERIDES_MG_PER_MMOL)
}

/// Holds the active mode per quantity family
///
/// # Examples
///
/// ```rust
/// use physio_core::models::{QuantityFamily, StateRecord, UnitMode};
/// use physio_intelligence::units::UnitRegistry;
///
/// let mut registry = UnitRegistry::default();
/// let mut record = StateRecord::default();
/// let switched = registry.set_mode(QuantityFamily::Glucose, UnitMode::Mmol, &mut record);
/// assert_eq!(switched.ok(), Some(true));
/// assert!((record.glucose - 85.0 / 18.0182).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitRegistry {
    modes: UnitModes,
}

impl UnitRegistry {
    /// Registry starting from explicit modes
    #[must_use]
    pub const fn with_modes(modes: UnitModes) -> Self {
        Self { modes }
    }

    /// Snapshot of the active modes, the value threaded into formulas
    #[must_use]
    pub const fn modes(&self) -> UnitModes {
        self.modes
    }

    /// Active mode of `family`
    #[must_use]
    pub const fn mode(&self, family: QuantityFamily) -> UnitMode {
        self.modes.mode(family)
    }

    /// Switch `family` to `mode`, converting the family's fields of `record` in place
    ///
    /// Returns `false` (and touches nothing) when `mode` is already active.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a converted value is not finite; neither the
    /// registry nor `record` change.
    pub fn set_mode(
        &mut self,
        family: QuantityFamily,
        mode: UnitMode,
        record: &mut StateRecord,
    ) -> AppResult<bool> {
        let current = self.modes.mode(family);
        if current == mode {
            return Ok(false);
        }
        convert_family(record, family, current, mode)?;
        self.modes = self.modes.with(family, mode);
        debug!(?family, from = ?current, to = ?mode, "Unit mode switched");
        Ok(true)
    }
}
