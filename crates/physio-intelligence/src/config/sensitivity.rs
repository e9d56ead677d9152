// ABOUTME: Sensitivity ranking configuration with per-metric normalization scales
// ABOUTME: Defaults, environment overrides and validation for the temporal top-N
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use crate::derived::MetricKey;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Domain-calibrated scale per metric: a change of one scale unit scores 1.0
mod scale_defaults {
    pub const BMI: f64 = 1.0;
    pub const BODY_FAT: f64 = 1.0;
    pub const RMR: f64 = 50.0;
    pub const TDEE: f64 = 50.0;
    pub const ENERGY_BALANCE: f64 = 100.0;
    pub const WEIGHT_DELTA: f64 = 0.1;
    pub const VO2MAX: f64 = 1.0;
    pub const HOMA_IR: f64 = 0.2;
    pub const LDL: f64 = 5.0;
    pub const TG_HDL: f64 = 0.1;
    pub const METABOLIC_SYNDROME: f64 = 1.0;
}

/// Number of entries reported by temporal sensitivity
const DEFAULT_TOP_N: usize = 5;

/// Environment variable overriding [`SensitivityConfig::top_n`]
pub const TOP_N_ENV: &str = "PHYSIO_SENSITIVITY_TOP_N";

/// Prefix of the per-metric scale overrides, e.g. `PHYSIO_SENSITIVITY_SCALE_EB`
pub const SCALE_ENV_PREFIX: &str = "PHYSIO_SENSITIVITY_SCALE_";

/// Normalization scale per derived metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScales {
    /// BMI (kg/m²)
    pub bmi: f64,
    /// Body fat (%)
    pub body_fat: f64,
    /// RMR (kcal/day)
    pub rmr: f64,
    /// Effective TDEE (kcal/day)
    pub tdee: f64,
    /// Energy balance (kcal/day)
    pub energy_balance: f64,
    /// Weekly weight change (kg)
    pub weight_delta: f64,
    /// VO2max (ml/kg/min)
    pub vo2max: f64,
    /// HOMA-IR
    pub homa_ir: f64,
    /// LDL (mg/dL)
    pub ldl: f64,
    /// TG/HDL ratio
    pub tg_hdl: f64,
    /// Metabolic syndrome criteria
    pub metabolic_syndrome: f64,
}

impl Default for MetricScales {
    fn default() -> Self {
        Self {
            bmi: scale_defaults::BMI,
            body_fat: scale_defaults::BODY_FAT,
            rmr: scale_defaults::RMR,
            tdee: scale_defaults::TDEE,
            energy_balance: scale_defaults::ENERGY_BALANCE,
            weight_delta: scale_defaults::WEIGHT_DELTA,
            vo2max: scale_defaults::VO2MAX,
            homa_ir: scale_defaults::HOMA_IR,
            ldl: scale_defaults::LDL,
            tg_hdl: scale_defaults::TG_HDL,
            metabolic_syndrome: scale_defaults::METABOLIC_SYNDROME,
        }
    }
}

impl MetricScales {
    /// Scale of `metric`
    #[must_use]
    pub const fn scale(&self, metric: MetricKey) -> f64 {
        match metric {
            MetricKey::Bmi => self.bmi,
            MetricKey::BodyFat => self.body_fat,
            MetricKey::Rmr => self.rmr,
            MetricKey::Tdee => self.tdee,
            MetricKey::EnergyBalance => self.energy_balance,
            MetricKey::WeightDelta => self.weight_delta,
            MetricKey::Vo2max => self.vo2max,
            MetricKey::HomaIr => self.homa_ir,
            MetricKey::Ldl => self.ldl,
            MetricKey::TgHdl => self.tg_hdl,
            MetricKey::MetabolicSyndrome => self.metabolic_syndrome,
        }
    }

    fn scale_mut(&mut self, metric: MetricKey) -> &mut f64 {
        match metric {
            MetricKey::Bmi => &mut self.bmi,
            MetricKey::BodyFat => &mut self.body_fat,
            MetricKey::Rmr => &mut self.rmr,
            MetricKey::Tdee => &mut self.tdee,
            MetricKey::EnergyBalance => &mut self.energy_balance,
            MetricKey::WeightDelta => &mut self.weight_delta,
            MetricKey::Vo2max => &mut self.vo2max,
            MetricKey::HomaIr => &mut self.homa_ir,
            MetricKey::Ldl => &mut self.ldl,
            MetricKey::TgHdl => &mut self.tg_hdl,
            MetricKey::MetabolicSyndrome => &mut self.metabolic_syndrome,
        }
    }
}

/// Sensitivity ranking configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityConfig {
    /// Normalization scales
    pub scales: MetricScales,
    /// Entries kept by temporal sensitivity
    pub top_n: usize,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            scales: MetricScales::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl SensitivityConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not parse or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any scale is not a positive finite number or `top_n` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if MetricKey::ALL.iter().any(|metric| {
            let scale = self.scales.scale(*metric);
            !scale.is_finite() || scale <= 0.0
        }) {
            return Err(ConfigError::InvalidRange(
                "sensitivity scales must be finite and > 0",
            ));
        }
        if self.top_n == 0 {
            return Err(ConfigError::ValueOutOfRange("top_n must be >= 1"));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(TOP_N_ENV, &mut self.top_n)?;
        for metric in MetricKey::ALL {
            let name = format!("{SCALE_ENV_PREFIX}{}", metric.code().to_uppercase());
            Self::apply_env_var(&name, self.scales.scale_mut(metric))?;
        }
        Ok(self)
    }
}
