// ABOUTME: State record model holding every biometric input of the sandbox
// ABOUTME: StateRecord, PartialRecord, RecordField keys, FieldValue and Sex definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by sex-specific formulas and thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (Mifflin-St Jeor +5, Deurenberg sex flag 1)
    #[default]
    Male,
    /// Female (Mifflin-St Jeor -161)
    Female,
}

impl Sex {
    /// Whether this is `Sex::Male`
    #[must_use]
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }

    /// Wire name (`male` / `female`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex '{other}', expected 'male' or 'female'"
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single document of truth the derivation engine reads from
///
/// Glucose and lipid fields are expressed in whichever unit mode is active
/// for their family; the record never stores a canonical copy next to them.
/// Missing members deserialize from the default profile, which is what
/// makes older and newer documents importable.
///
/// # Examples
///
/// ```rust
/// use physio_core::models::{Sex, StateRecord};
///
/// let record = StateRecord::default();
/// assert_eq!(record.sex, Sex::Male);
/// assert_eq!(record.age, 35);
/// assert!((record.weight_kg - 75.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateRecord {
    /// Biological sex
    pub sex: Sex,
    /// Age in whole years
    #[serde(deserialize_with = "whole_number")]
    pub age: u32,
    /// Body height (cm)
    pub height_cm: f64,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Waist circumference (cm)
    pub waist_cm: f64,
    /// Resting heart rate (bpm)
    pub rhr: f64,
    /// Systolic blood pressure (mmHg)
    pub sbp: f64,
    /// Diastolic blood pressure (mmHg)
    pub dbp: f64,
    /// Physical activity level multiplier (>= 1)
    pub pal: f64,
    /// Fasting glucose in the active glucose unit
    pub glucose: f64,
    /// Fasting insulin (µU/mL)
    pub insulin: f64,
    /// `HbA1c` (%)
    pub hba1c: f64,
    /// Total cholesterol in the active lipid unit
    pub tc: f64,
    /// HDL cholesterol in the active lipid unit
    pub hdl: f64,
    /// Triglycerides in the active lipid unit
    pub tg: f64,
    /// Baseline daily intake (kcal)
    pub kcal_intake: f64,
    /// Projection length in weeks
    #[serde(deserialize_with = "whole_number")]
    pub horizon_weeks: u32,
    /// Daily steps beyond baseline
    pub steps_extra: f64,
    /// Manual intake adjustment (kcal/day)
    pub kcal_delta: f64,
    /// Strength sessions per week
    pub strength_pw: f64,
}

impl Default for StateRecord {
    fn default() -> Self {
        Self {
            sex: Sex::Male,
            age: 35,
            height_cm: 180.0,
            weight_kg: 75.0,
            waist_cm: 84.0,
            rhr: 55.0,
            sbp: 118.0,
            dbp: 76.0,
            pal: 1.6,
            glucose: 85.0,
            insulin: 5.0,
            hba1c: 5.0,
            tc: 175.0,
            hdl: 60.0,
            tg: 90.0,
            kcal_intake: 2400.0,
            horizon_weeks: 12,
            steps_extra: 0.0,
            kcal_delta: 0.0,
            strength_pw: 0.0,
        }
    }
}

impl StateRecord {
    /// Idealized target profile used by the "optimum" action
    #[must_use]
    pub fn optimum() -> Self {
        Self {
            sex: Sex::Male,
            age: 25,
            height_cm: 180.0,
            weight_kg: 72.0,
            waist_cm: 80.0,
            rhr: 52.0,
            sbp: 115.0,
            dbp: 75.0,
            pal: 1.75,
            glucose: 82.0,
            insulin: 4.5,
            hba1c: 5.0,
            tc: 170.0,
            hdl: 62.0,
            tg: 80.0,
            kcal_intake: 2500.0,
            horizon_weeks: 12,
            steps_extra: 3000.0,
            kcal_delta: 0.0,
            strength_pw: 2.0,
        }
    }

    /// Read a single field
    #[must_use]
    pub fn get(&self, field: RecordField) -> FieldValue {
        let number = match field {
            RecordField::Sex => return FieldValue::Sex(self.sex),
            RecordField::Age => f64::from(self.age),
            RecordField::HeightCm => self.height_cm,
            RecordField::WeightKg => self.weight_kg,
            RecordField::WaistCm => self.waist_cm,
            RecordField::Rhr => self.rhr,
            RecordField::Sbp => self.sbp,
            RecordField::Dbp => self.dbp,
            RecordField::Pal => self.pal,
            RecordField::Glucose => self.glucose,
            RecordField::Insulin => self.insulin,
            RecordField::Hba1c => self.hba1c,
            RecordField::Tc => self.tc,
            RecordField::Hdl => self.hdl,
            RecordField::Tg => self.tg,
            RecordField::KcalIntake => self.kcal_intake,
            RecordField::HorizonWeeks => f64::from(self.horizon_weeks),
            RecordField::StepsExtra => self.steps_extra,
            RecordField::KcalDelta => self.kcal_delta,
            RecordField::StrengthPw => self.strength_pw,
        };
        FieldValue::Number(number)
    }

    /// Overwrite a single field
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the value kind does not match the field, if a
    /// number is not finite, or if a whole-number field receives a negative value.
    /// The record is left unchanged on error.
    pub fn apply(&mut self, field: RecordField, value: FieldValue) -> AppResult<()> {
        let number = match (field, value) {
            (RecordField::Sex, FieldValue::Sex(sex)) => {
                self.sex = sex;
                return Ok(());
            }
            (RecordField::Sex, FieldValue::Number(_)) => {
                return Err(AppError::invalid_input("Field 'sex' expects 'male' or 'female'"));
            }
            (other, FieldValue::Sex(_)) => {
                return Err(AppError::invalid_input(format!(
                    "Field '{other}' expects a number"
                )));
            }
            (_, FieldValue::Number(number)) => number,
        };

        if !number.is_finite() {
            return Err(AppError::invalid_input(format!(
                "Field '{field}' requires a finite number"
            )));
        }

        match field {
            RecordField::Age => self.age = to_whole(field, number)?,
            RecordField::HorizonWeeks => self.horizon_weeks = to_whole(field, number)?,
            _ => {
                if let Some(slot) = self.number_slot(field) {
                    *slot = number;
                }
            }
        }
        Ok(())
    }

    /// Copy every present member of `partial` onto this record
    pub fn merge(&mut self, partial: &PartialRecord) {
        macro_rules! take {
            ($($name:ident),*) => {
                $(if let Some(value) = partial.$name { self.$name = value; })*
            };
        }
        take!(
            sex, age, height_cm, weight_kg, waist_cm, rhr, sbp, dbp, pal, glucose, insulin,
            hba1c, tc, hdl, tg, kcal_intake, horizon_weeks, steps_extra, kcal_delta, strength_pw
        );
    }

    fn number_slot(&mut self, field: RecordField) -> Option<&mut f64> {
        Some(match field {
            RecordField::HeightCm => &mut self.height_cm,
            RecordField::WeightKg => &mut self.weight_kg,
            RecordField::WaistCm => &mut self.waist_cm,
            RecordField::Rhr => &mut self.rhr,
            RecordField::Sbp => &mut self.sbp,
            RecordField::Dbp => &mut self.dbp,
            RecordField::Pal => &mut self.pal,
            RecordField::Glucose => &mut self.glucose,
            RecordField::Insulin => &mut self.insulin,
            RecordField::Hba1c => &mut self.hba1c,
            RecordField::Tc => &mut self.tc,
            RecordField::Hdl => &mut self.hdl,
            RecordField::Tg => &mut self.tg,
            RecordField::KcalIntake => &mut self.kcal_intake,
            RecordField::StepsExtra => &mut self.steps_extra,
            RecordField::KcalDelta => &mut self.kcal_delta,
            RecordField::StrengthPw => &mut self.strength_pw,
            RecordField::Sex | RecordField::Age | RecordField::HorizonWeeks => return None,
        })
    }
}

fn to_whole(field: RecordField, number: f64) -> AppResult<u32> {
    if number < 0.0 || number > f64::from(u32::MAX) {
        return Err(AppError::invalid_input(format!(
            "Field '{field}' must be a non-negative whole number"
        )));
    }
    Ok(number.round() as u32)
}

/// Accept integral JSON numbers as well as floats written by older exports
fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = f64::deserialize(deserializer)?;
    if !number.is_finite() || number < 0.0 || number > f64::from(u32::MAX) {
        return Err(de::Error::custom(format!(
            "expected a non-negative whole number, got {number}"
        )));
    }
    Ok(number.round() as u32)
}

/// A partial profile: only the present members are applied by [`StateRecord::merge`]
///
/// Used for `set_many` and for lifestyle scenarios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialRecord {
    /// Biological sex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    /// Age in whole years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Body height (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Body weight (kg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Waist circumference (cm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    /// Resting heart rate (bpm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhr: Option<f64>,
    /// Systolic blood pressure (mmHg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbp: Option<f64>,
    /// Diastolic blood pressure (mmHg)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbp: Option<f64>,
    /// Physical activity level multiplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pal: Option<f64>,
    /// Fasting glucose in the active glucose unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glucose: Option<f64>,
    /// Fasting insulin (µU/mL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insulin: Option<f64>,
    /// `HbA1c` (%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hba1c: Option<f64>,
    /// Total cholesterol in the active lipid unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tc: Option<f64>,
    /// HDL cholesterol in the active lipid unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdl: Option<f64>,
    /// Triglycerides in the active lipid unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tg: Option<f64>,
    /// Baseline daily intake (kcal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kcal_intake: Option<f64>,
    /// Projection length in weeks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizon_weeks: Option<u32>,
    /// Daily steps beyond baseline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_extra: Option<f64>,
    /// Manual intake adjustment (kcal/day)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kcal_delta: Option<f64>,
    /// Strength sessions per week
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_pw: Option<f64>,
}

impl PartialRecord {
    /// Fields present in this partial, in record order
    #[must_use]
    pub fn fields(&self) -> Vec<RecordField> {
        RecordField::ALL
            .iter()
            .copied()
            .filter(|field| self.contains(*field))
            .collect()
    }

    /// Whether `field` is present
    #[must_use]
    pub const fn contains(&self, field: RecordField) -> bool {
        match field {
            RecordField::Sex => self.sex.is_some(),
            RecordField::Age => self.age.is_some(),
            RecordField::HeightCm => self.height_cm.is_some(),
            RecordField::WeightKg => self.weight_kg.is_some(),
            RecordField::WaistCm => self.waist_cm.is_some(),
            RecordField::Rhr => self.rhr.is_some(),
            RecordField::Sbp => self.sbp.is_some(),
            RecordField::Dbp => self.dbp.is_some(),
            RecordField::Pal => self.pal.is_some(),
            RecordField::Glucose => self.glucose.is_some(),
            RecordField::Insulin => self.insulin.is_some(),
            RecordField::Hba1c => self.hba1c.is_some(),
            RecordField::Tc => self.tc.is_some(),
            RecordField::Hdl => self.hdl.is_some(),
            RecordField::Tg => self.tg.is_some(),
            RecordField::KcalIntake => self.kcal_intake.is_some(),
            RecordField::HorizonWeeks => self.horizon_weeks.is_some(),
            RecordField::StepsExtra => self.steps_extra.is_some(),
            RecordField::KcalDelta => self.kcal_delta.is_some(),
            RecordField::StrengthPw => self.strength_pw.is_some(),
        }
    }
}

/// Key of a single state record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    /// `sex`
    Sex,
    /// `age`
    Age,
    /// `height_cm`
    HeightCm,
    /// `weight_kg`
    WeightKg,
    /// `waist_cm`
    WaistCm,
    /// `rhr`
    Rhr,
    /// `sbp`
    Sbp,
    /// `dbp`
    Dbp,
    /// `pal`
    Pal,
    /// `glucose`
    Glucose,
    /// `insulin`
    Insulin,
    /// `hba1c`
    Hba1c,
    /// `tc`
    Tc,
    /// `hdl`
    Hdl,
    /// `tg`
    Tg,
    /// `kcal_intake`
    KcalIntake,
    /// `horizon_weeks`
    HorizonWeeks,
    /// `steps_extra`
    StepsExtra,
    /// `kcal_delta`
    KcalDelta,
    /// `strength_pw`
    StrengthPw,
}

impl RecordField {
    /// Every field in record order
    pub const ALL: [Self; 20] = [
        Self::Sex,
        Self::Age,
        Self::HeightCm,
        Self::WeightKg,
        Self::WaistCm,
        Self::Rhr,
        Self::Sbp,
        Self::Dbp,
        Self::Pal,
        Self::Glucose,
        Self::Insulin,
        Self::Hba1c,
        Self::Tc,
        Self::Hdl,
        Self::Tg,
        Self::KcalIntake,
        Self::HorizonWeeks,
        Self::StepsExtra,
        Self::KcalDelta,
        Self::StrengthPw,
    ];

    /// Wire name of the field
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sex => "sex",
            Self::Age => "age",
            Self::HeightCm => "height_cm",
            Self::WeightKg => "weight_kg",
            Self::WaistCm => "waist_cm",
            Self::Rhr => "rhr",
            Self::Sbp => "sbp",
            Self::Dbp => "dbp",
            Self::Pal => "pal",
            Self::Glucose => "glucose",
            Self::Insulin => "insulin",
            Self::Hba1c => "hba1c",
            Self::Tc => "tc",
            Self::Hdl => "hdl",
            Self::Tg => "tg",
            Self::KcalIntake => "kcal_intake",
            Self::HorizonWeeks => "horizon_weeks",
            Self::StepsExtra => "steps_extra",
            Self::KcalDelta => "kcal_delta",
            Self::StrengthPw => "strength_pw",
        }
    }
}

impl FromStr for RecordField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown field '{wanted}'")))
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value written into a single field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Numeric field value
    Number(f64),
    /// Value of the `sex` field
    Sex(Sex),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Sex> for FieldValue {
    fn from(value: Sex) -> Self {
        Self::Sex(value)
    }
}
