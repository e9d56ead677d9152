// ABOUTME: Unit conversion constants for glucose, lipid and energy quantities
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Glucose: mg/dL per mmol/L
pub const GLUCOSE_MG_PER_MMOL: f64 = 18.0182;

/// Total cholesterol and HDL: mg/dL per mmol/L
pub const CHOLESTEROL_MG_PER_MMOL: f64 = 38.67;

/// Triglycerides: mg/dL per mmol/L
pub const TRIGLYCERIDES_MG_PER_MMOL: f64 = 88.57;

/// Days per week
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Energy content of one kilogram of adipose tissue (kcal)
pub const KCAL_PER_KG_ADIPOSE: f64 = 7700.0;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;
