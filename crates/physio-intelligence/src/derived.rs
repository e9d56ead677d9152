// ABOUTME: Derived metrics vector bundling the eleven comparison metrics of a state record
// ABOUTME: MetricKey enumeration in fixed order and the derive_vector aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::{
    bmi, body_fat_pct, energy_balance, homa_ir, ldl_mgdl, metabolic_syndrome_count, rmr,
    tdee_effective, tg_hdl_ratio, vo2max, weight_change_per_week,
};
use physio_core::errors::AppError;
use physio_core::models::{StateRecord, UnitModes};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Metric of the derived vector
///
/// Declaration order is the enumeration order used to break ranking ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricKey {
    /// Body mass index
    #[serde(rename = "BMI")]
    Bmi,
    /// Body fat percentage
    #[serde(rename = "BF")]
    BodyFat,
    /// Resting metabolic rate
    #[serde(rename = "RMR")]
    Rmr,
    /// Effective total daily energy expenditure
    #[serde(rename = "TDEE")]
    Tdee,
    /// Energy balance
    #[serde(rename = "EB")]
    EnergyBalance,
    /// Weekly weight change
    #[serde(rename = "dW")]
    WeightDelta,
    /// VO2max estimate
    #[serde(rename = "VO2")]
    Vo2max,
    /// HOMA-IR
    #[serde(rename = "HOMA")]
    HomaIr,
    /// Friedewald LDL (mg/dL)
    #[serde(rename = "LDL")]
    Ldl,
    /// Triglyceride to HDL ratio
    #[serde(rename = "TGHDL")]
    TgHdl,
    /// Metabolic syndrome criteria count
    #[serde(rename = "MS")]
    MetabolicSyndrome,
}

impl MetricKey {
    /// All metrics in enumeration order
    pub const ALL: [Self; 11] = [
        Self::Bmi,
        Self::BodyFat,
        Self::Rmr,
        Self::Tdee,
        Self::EnergyBalance,
        Self::WeightDelta,
        Self::Vo2max,
        Self::HomaIr,
        Self::Ldl,
        Self::TgHdl,
        Self::MetabolicSyndrome,
    ];

    /// Short code used in documents and reports
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Bmi => "BMI",
            Self::BodyFat => "BF",
            Self::Rmr => "RMR",
            Self::Tdee => "TDEE",
            Self::EnergyBalance => "EB",
            Self::WeightDelta => "dW",
            Self::Vo2max => "VO2",
            Self::HomaIr => "HOMA",
            Self::Ldl => "LDL",
            Self::TgHdl => "TGHDL",
            Self::MetabolicSyndrome => "MS",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MetricKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown metric '{s}'")))
    }
}

/// Derived metrics of one state record, in [`MetricKey::ALL`] order
///
/// Never persisted; always reproducible from the record and the unit modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedVector {
    values: [f64; 11],
}

impl DerivedVector {
    /// Value of `metric`
    #[must_use]
    pub const fn get(&self, metric: MetricKey) -> f64 {
        self.values[metric.index()]
    }

    /// `(metric, value)` pairs in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (MetricKey, f64)> + '_ {
        MetricKey::ALL.iter().map(|key| (*key, self.get(*key)))
    }
}

impl Serialize for DerivedVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.code(), &value)?;
        }
        map.end()
    }
}

/// Evaluate every comparison metric of `record` under `units`
///
/// # Examples
///
/// ```rust
/// use physio_core::models::{StateRecord, UnitModes};
/// use physio_intelligence::{derive_vector, MetricKey};
///
/// let vector = derive_vector(&StateRecord::default(), UnitModes::default());
/// assert!((vector.get(MetricKey::Bmi) - 23.148).abs() < 1e-3);
/// ```
#[must_use]
pub fn derive_vector(record: &StateRecord, units: UnitModes) -> DerivedVector {
    let mut values = [0.0; 11];
    for key in MetricKey::ALL {
        values[key.index()] = match key {
            MetricKey::Bmi => bmi(record),
            MetricKey::BodyFat => body_fat_pct(record),
            MetricKey::Rmr => rmr(record),
            MetricKey::Tdee => tdee_effective(record),
            MetricKey::EnergyBalance => energy_balance(record),
            MetricKey::WeightDelta => weight_change_per_week(record),
            MetricKey::Vo2max => vo2max(record),
            MetricKey::HomaIr => homa_ir(record, units),
            MetricKey::Ldl => ldl_mgdl(record, units),
            MetricKey::TgHdl => tg_hdl_ratio(record, units),
            MetricKey::MetabolicSyndrome => f64::from(metabolic_syndrome_count(record, units)),
        };
    }
    DerivedVector { values }
}
