// ABOUTME: Normalized-delta ranking between two derived metric vectors
// ABOUTME: Temporal sensitivity against the previous render and A/B snapshot comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sensitivity / Comparison
//!
//! For every metric the signed delta `current - previous` is divided by the
//! metric's scale from [`MetricScales`] and ranked by absolute score,
//! descending. The sort is stable, so equal scores keep the enumeration
//! order of [`MetricKey::ALL`]. Non-finite scores rank after every finite one.

use crate::config::{MetricScales, SensitivityConfig};
use crate::derived::{DerivedVector, MetricKey};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// Change of one metric between two vectors
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricDelta {
    /// Metric
    pub metric: MetricKey,
    /// Signed change (`current - previous`, or `B - A`)
    pub delta: f64,
    /// `|delta| / scale`
    pub score: f64,
}

fn by_score_descending(a: &MetricDelta, b: &MetricDelta) -> Ordering {
    match (a.score.is_finite(), b.score.is_finite()) {
        (true, true) => b.score.total_cmp(&a.score),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Every metric's delta from `previous` to `current`, ranked
#[must_use]
pub fn rank_deltas(
    previous: &DerivedVector,
    current: &DerivedVector,
    scales: &MetricScales,
) -> Vec<MetricDelta> {
    let mut deltas: Vec<MetricDelta> = MetricKey::ALL
        .iter()
        .map(|metric| {
            let delta = current.get(*metric) - previous.get(*metric);
            MetricDelta {
                metric: *metric,
                delta,
                score: delta.abs() / scales.scale(*metric),
            }
        })
        .collect();
    deltas.sort_by(by_score_descending);
    deltas
}

/// Top-N ranked deltas between two consecutive renders
#[must_use]
pub fn temporal_sensitivity(
    previous: &DerivedVector,
    current: &DerivedVector,
    config: &SensitivityConfig,
) -> Vec<MetricDelta> {
    let mut ranked = rank_deltas(previous, current, &config.scales);
    ranked.truncate(config.top_n);
    ranked
}

/// All metrics ranked by the change from snapshot A to snapshot B
#[must_use]
pub fn compare_snapshots(
    a: &DerivedVector,
    b: &DerivedVector,
    scales: &MetricScales,
) -> Vec<MetricDelta> {
    rank_deltas(a, b, scales)
}

/// Remembers the vector of the last render
///
/// The baseline is replaced on every [`observe`](Self::observe), whether or
/// not the record changed in between, so two renders in a row without a
/// mutation yield all-zero deltas on the second call.
#[derive(Debug, Clone, Default)]
pub struct SensitivityTracker {
    previous: Option<DerivedVector>,
    config: SensitivityConfig,
}

impl SensitivityTracker {
    /// Tracker with an explicit configuration
    #[must_use]
    pub const fn new(config: SensitivityConfig) -> Self {
        Self {
            previous: None,
            config,
        }
    }

    /// Rank `current` against the previous render and make it the new baseline
    ///
    /// Returns an empty list on the first call.
    pub fn observe(&mut self, current: DerivedVector) -> Vec<MetricDelta> {
        let ranked = self
            .previous
            .as_ref()
            .map(|previous| temporal_sensitivity(previous, &current, &self.config))
            .unwrap_or_default();
        self.previous = Some(current);
        if let Some(top) = ranked.first() {
            debug!(metric = %top.metric, score = top.score, "Sensitivity baseline replaced");
        }
        ranked
    }

    /// Vector of the last render, if any
    #[must_use]
    pub const fn baseline(&self) -> Option<&DerivedVector> {
        self.previous.as_ref()
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &SensitivityConfig {
        &self.config
    }
}
