//! The finalized, immutable shape of a run's results.
//!
//! A [`Snapshot`] is plain data for the reporting layer: nested ordered
//! maps and lists, serializable as-is. It renders nothing itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::extract::ExtractionLevel;
use crate::filter::MorphologyMode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarityTotals {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

impl PolarityTotals {
    /// Positive plus negative; the denominator for percentage fields.
    pub fn evaluative(&self) -> u64 {
        self.positive + self.negative
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedLemma {
    pub lemma: String,
    pub count: u64,
}

/// One source's share of the totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceTotals {
    pub positive: BTreeMap<String, u64>,
    pub negative: BTreeMap<String, u64>,
    pub documents: u64,
    pub mentions: u64,
    pub top_positive: Vec<RankedLemma>,
    pub top_negative: Vec<RankedLemma>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub totals_by_polarity: PolarityTotals,
    /// Share of positive among evaluative candidates; 0 when there are
    /// none, never NaN.
    pub percent_positive: f64,
    pub percent_negative: f64,
    pub totals_by_level: BTreeMap<ExtractionLevel, BTreeMap<String, u64>>,
    pub totals_by_source: BTreeMap<String, SourceTotals>,
    pub totals_by_category: BTreeMap<String, u64>,
    pub top_positive: Vec<RankedLemma>,
    pub top_negative: Vec<RankedLemma>,
    pub sample_contexts_positive: Vec<String>,
    pub sample_contexts_negative: Vec<String>,
    /// How often each dependency relation (or the window) surfaced a
    /// candidate.
    pub relation_counts: BTreeMap<String, u64>,
    pub documents_processed: u64,
    pub target_mentions: u64,
    pub related_mentions: u64,
    pub defective_tokens: u64,
    /// Candidates whose lemma sat in neither polarity lexicon. Expected
    /// steady-state, kept for lexicon-coverage auditing.
    pub lexicon_misses: u64,
    pub suffix_admissions: u64,
    pub intensified: u64,
    pub attenuated: u64,
    /// Window-level candidates per dependency-grounded candidate; absent
    /// when no dependency candidate was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_to_dependency_ratio: Option<f64>,
    /// The morphological gate the run was made under. Runs under
    /// different gates are not comparable.
    pub filter_mode: MorphologyMode,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
