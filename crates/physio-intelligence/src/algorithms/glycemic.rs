// ABOUTME: Glycemic indices normalized to mg/dL regardless of the active glucose unit
// ABOUTME: HOMA-IR and estimated average glucose from HbA1c
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::physiological_constants::glycemic::{EAG_INTERCEPT, EAG_SLOPE, HOMA_IR_DIVISOR};
use crate::units::glucose_mgdl;
use physio_core::constants::units::GLUCOSE_MG_PER_MMOL;
use physio_core::models::{StateRecord, UnitModes};

/// HOMA-IR: `glucose_mgdl x insulin / 405`
#[must_use]
pub fn homa_ir(record: &StateRecord, units: UnitModes) -> f64 {
    glucose_mgdl(record, units) * record.insulin / HOMA_IR_DIVISOR
}

/// Estimated average glucose: `28.7 x HbA1c - 46.7` (mg/dL)
#[must_use]
pub fn eag_mgdl(record: &StateRecord) -> f64 {
    EAG_SLOPE.mul_add(record.hba1c, -EAG_INTERCEPT)
}

/// Estimated average glucose in mmol/L
#[must_use]
pub fn eag_mmol(record: &StateRecord) -> f64 {
    eag_mgdl(record) / GLUCOSE_MG_PER_MMOL
}

#[cfg(test)]
mod tests {
    use super::*;
    use physio_core::models::{QuantityFamily, UnitMode};

    #[test]
    fn test_homa_ir_default_profile() {
        let value = homa_ir(&StateRecord::default(), UnitModes::default());
        assert!((value - 85.0 * 5.0 / 405.0).abs() < 1e-12);
    }

    #[test]
    fn test_homa_ir_normalizes_mmol_glucose() {
        let record = StateRecord {
            glucose: 85.0 / 18.0182,
            ..StateRecord::default()
        };
        let units = UnitModes::default().with(QuantityFamily::Glucose, UnitMode::Mmol);
        assert!((homa_ir(&record, units) - 85.0 * 5.0 / 405.0).abs() < 1e-9);
    }

    #[test]
    fn test_eag() {
        let record = StateRecord {
            hba1c: 6.0,
            ..StateRecord::default()
        };
        assert!((eag_mgdl(&record) - 125.5).abs() < 1e-9);
        assert!((eag_mmol(&record) - 125.5 / 18.0182).abs() < 1e-9);
    }
}
