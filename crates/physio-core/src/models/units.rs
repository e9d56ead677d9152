// ABOUTME: Unit mode model for glucose and lipid quantity families
// ABOUTME: UnitMode, QuantityFamily and the UnitModes pair threaded into every formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system for a quantity family
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitMode {
    /// Mass concentration (mg/dL)
    #[default]
    Mg,
    /// Molar concentration (mmol/L)
    Mmol,
}

impl UnitMode {
    /// Display label of the unit
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mg => "mg/dL",
            Self::Mmol => "mmol/L",
        }
    }
}

impl FromStr for UnitMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mg" | "mg/dl" => Ok(Self::Mg),
            "mmol" | "mmol/l" => Ok(Self::Mmol),
            other => Err(AppError::invalid_input(format!(
                "Unknown unit mode '{other}', expected 'mg' or 'mmol'"
            ))),
        }
    }
}

impl fmt::Display for UnitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Group of record fields that switch units together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityFamily {
    /// `glucose`
    Glucose,
    /// `tc`, `hdl`, `tg`
    Lipids,
}

impl FromStr for QuantityFamily {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "glucose" | "glc" => Ok(Self::Glucose),
            "lipids" | "lipid" | "lip" => Ok(Self::Lipids),
            other => Err(AppError::invalid_input(format!(
                "Unknown quantity family '{other}', expected 'glucose' or 'lipids'"
            ))),
        }
    }
}

/// Active unit mode per family, passed explicitly into unit-sensitive formulas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitModes {
    /// Mode of the glucose family
    pub glucose: UnitMode,
    /// Mode of the lipid family
    pub lipids: UnitMode,
}

impl UnitModes {
    /// Mode active for `family`
    #[must_use]
    pub const fn mode(self, family: QuantityFamily) -> UnitMode {
        match family {
            QuantityFamily::Glucose => self.glucose,
            QuantityFamily::Lipids => self.lipids,
        }
    }

    /// Copy with `family` switched to `mode`
    #[must_use]
    pub const fn with(mut self, family: QuantityFamily, mode: UnitMode) -> Self {
        match family {
            QuantityFamily::Glucose => self.glucose = mode,
            QuantityFamily::Lipids => self.lipids = mode,
        }
        self
    }
}
