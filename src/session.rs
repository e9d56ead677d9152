// ABOUTME: Session facade pairing the state store with the sensitivity tracker
// ABOUTME: Render pass producing the full numeric report consumed by presentation layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::store::StateStore;
use physio_core::models::{RecordField, StateRecord, UnitModes};
use physio_intelligence::algorithms::{
    eag_mgdl, eag_mmol, homa_ir, ldl_in_active_unit, ldl_mgdl, max_heart_rate, non_hdl_mgdl,
    tg_hdl_ratio, vo2max, EnergyBreakdown, MetabolicSyndromeCriteria,
};
use physio_intelligence::categories::Badge;
use physio_intelligence::config::SensitivityConfig;
use physio_intelligence::{
    compare_snapshots, derive_vector, project_weight, CategoryReport, DerivedVector, MetricDelta,
    ProjectionPoint, SensitivityTracker,
};
use serde::Serialize;
use tracing::debug;

/// One classified metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    /// Metric name
    pub metric: &'static str,
    /// Classification
    #[serde(flatten)]
    pub badge: Badge,
}

/// Cardiovascular fitness figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardioFigures {
    /// Maximum heart rate (bpm)
    pub max_heart_rate: f64,
    /// VO2max estimate (ml/kg/min)
    pub vo2max: f64,
}

/// Glycemic figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlycemicFigures {
    /// HOMA-IR
    pub homa_ir: f64,
    /// Estimated average glucose (mg/dL)
    pub eag_mgdl: f64,
    /// Estimated average glucose (mmol/L)
    pub eag_mmol: f64,
}

/// Lipid figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LipidFigures {
    /// Friedewald LDL (mg/dL), `null` when undefined
    pub ldl_mgdl: f64,
    /// LDL in the active lipid unit, `None` when undefined
    pub ldl_active_unit: Option<f64>,
    /// Non-HDL cholesterol (mg/dL)
    pub non_hdl_mgdl: f64,
    /// TG/HDL ratio
    pub tg_hdl: f64,
}

/// Temporal sensitivity of one render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityReport {
    /// Field named by the most recent single-field edit
    pub last_changed: Option<RecordField>,
    /// Top-N ranked deltas against the previous render
    pub items: Vec<MetricDelta>,
}

/// Everything a presentation layer shows for the current state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Live record
    pub record: StateRecord,
    /// Active unit modes
    pub units: UnitModes,
    /// Comparison metrics
    pub derived: DerivedVector,
    /// Classified metrics in presentation order
    pub categories: Vec<CategoryEntry>,
    /// Energy model intermediates
    pub energy: EnergyBreakdown,
    /// Cardiovascular figures
    pub cardio: CardioFigures,
    /// Glycemic figures
    pub glycemic: GlycemicFigures,
    /// Lipid figures
    pub lipids: LipidFigures,
    /// Metabolic syndrome criteria
    pub metabolic_syndrome: MetabolicSyndromeCriteria,
    /// Weight trajectory
    pub projection: Vec<ProjectionPoint>,
    /// Temporal sensitivity
    pub sensitivity: SensitivityReport,
    /// Snapshot comparison (B - A), present when both slots are filled
    pub comparison: Option<Vec<MetricDelta>>,
}

/// A live sandbox session
///
/// Owns the store and remembers the derived vector of the last
/// [`render`](Self::render) for temporal sensitivity.
#[derive(Debug)]
pub struct Sandbox {
    store: StateStore,
    tracker: SensitivityTracker,
}

impl Sandbox {
    /// Session over `store` ranking with `config`
    #[must_use]
    pub const fn new(store: StateStore, config: SensitivityConfig) -> Self {
        Self {
            store,
            tracker: SensitivityTracker::new(config),
        }
    }

    /// The store
    #[must_use]
    pub const fn store(&self) -> &StateStore {
        &self.store
    }

    /// The store, for mutations
    pub fn store_mut(&mut self) -> &mut StateStore {
        &mut self.store
    }

    /// Compute the full report and make its derived vector the new sensitivity baseline
    pub fn render(&mut self) -> Report {
        let record = self.store.record().clone();
        let units = self.store.units();
        let derived = derive_vector(&record, units);
        let items = self.tracker.observe(derived);

        let comparison = match (self.store.snapshot_a(), self.store.snapshot_b()) {
            (Some(a), Some(b)) => Some(compare_snapshots(
                &derive_vector(a, units),
                &derive_vector(b, units),
                &self.tracker.config().scales,
            )),
            _ => None,
        };

        let categories = CategoryReport::evaluate(&record, units)
            .badges()
            .into_iter()
            .map(|(metric, badge)| CategoryEntry { metric, badge })
            .collect();

        debug!(
            sensitivity_items = items.len(),
            comparison = comparison.is_some(),
            "Rendered sandbox report"
        );

        Report {
            units,
            derived,
            categories,
            energy: EnergyBreakdown::from_record(&record),
            cardio: CardioFigures {
                max_heart_rate: max_heart_rate(&record),
                vo2max: vo2max(&record),
            },
            glycemic: GlycemicFigures {
                homa_ir: homa_ir(&record, units),
                eag_mgdl: eag_mgdl(&record),
                eag_mmol: eag_mmol(&record),
            },
            lipids: LipidFigures {
                ldl_mgdl: ldl_mgdl(&record, units),
                ldl_active_unit: ldl_in_active_unit(&record, units),
                non_hdl_mgdl: non_hdl_mgdl(&record, units),
                tg_hdl: tg_hdl_ratio(&record, units),
            },
            metabolic_syndrome: MetabolicSyndromeCriteria::evaluate(&record, units),
            projection: project_weight(&record),
            sensitivity: SensitivityReport {
                last_changed: self.store.last_changed(),
                items,
            },
            comparison,
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use physio_intelligence::MetricKey;

    fn sandbox() -> Sandbox {
        Sandbox::new(
            StateStore::new(Box::new(MemoryStorage::new()), 50),
            SensitivityConfig::default(),
        )
    }

    #[test]
    fn test_first_render_has_no_sensitivity() {
        let mut session = sandbox();
        let report = session.render();
        assert!(report.sensitivity.items.is_empty());
        assert!(report.comparison.is_none());
        assert_eq!(report.categories.len(), 9);
        assert_eq!(report.projection.len(), 13);
    }

    #[test]
    fn test_render_after_edit_names_field() {
        let mut session = sandbox();
        session.render();
        session
            .store_mut()
            .set(RecordField::WeightKg, 85.0)
            .unwrap();
        let report = session.render();
        assert_eq!(report.sensitivity.last_changed, Some(RecordField::WeightKg));
        assert_eq!(report.sensitivity.items.len(), 5);
        assert!(report
            .sensitivity
            .items
            .iter()
            .any(|item| item.metric == MetricKey::Bmi));
    }

    #[test]
    fn test_comparison_needs_both_snapshots() {
        let mut session = sandbox();
        session.store_mut().set_snapshot_a();
        assert!(session.render().comparison.is_none());

        session.store_mut().set(RecordField::KcalDelta, -500.0).unwrap();
        session.store_mut().set_snapshot_b();
        let comparison = session.render().comparison.unwrap();
        assert_eq!(comparison.len(), MetricKey::ALL.len());
        assert_eq!(comparison[0].metric, MetricKey::EnergyBalance);
        assert!(comparison[0].delta < 0.0);
    }
}
