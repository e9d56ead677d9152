// ABOUTME: Named lifestyle scenarios merged onto the current record
// ABOUTME: Fixed-order preset table of partial profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use physio_core::models::PartialRecord;

/// Lifestyle presets in presentation order
const SCENARIOS: [(&str, Preset); 3] = [
    (
        "Sitzend",
        Preset {
            pal: 1.4,
            kcal_intake: 2200.0,
            steps_extra: 1000.0,
            strength_pw: 0.0,
        },
    ),
    (
        "Aktiv",
        Preset {
            pal: 1.9,
            kcal_intake: 2700.0,
            steps_extra: 8000.0,
            strength_pw: 3.0,
        },
    ),
    (
        "Nachtschicht",
        Preset {
            pal: 1.6,
            kcal_intake: 2500.0,
            steps_extra: 4000.0,
            strength_pw: 1.0,
        },
    ),
];

struct Preset {
    pal: f64,
    kcal_intake: f64,
    steps_extra: f64,
    strength_pw: f64,
}

impl Preset {
    fn to_partial(&self) -> PartialRecord {
        PartialRecord {
            pal: Some(self.pal),
            kcal_intake: Some(self.kcal_intake),
            steps_extra: Some(self.steps_extra),
            strength_pw: Some(self.strength_pw),
            ..PartialRecord::default()
        }
    }
}

/// Partial profile of the scenario called `name` (exact match)
#[must_use]
pub fn scenario(name: &str) -> Option<PartialRecord> {
    SCENARIOS
        .iter()
        .find(|(scenario_name, _)| *scenario_name == name)
        .map(|(_, preset)| preset.to_partial())
}

/// Scenario names in their fixed order
#[must_use]
pub fn scenario_names() -> Vec<&'static str> {
    SCENARIOS.iter().map(|(name, _)| *name).collect()
}
