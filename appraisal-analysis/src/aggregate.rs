//! Run-level aggregation of candidate batches.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use appraisal_nlp::DocMeta;

use crate::analyzer::DocumentAnalysis;
use crate::extract::{Candidate, ExtractionLevel};
use crate::filter::MorphologyMode;
use crate::lexicon::LexiconRegistry;
use crate::polarity::{Intensity, Polarity};
use crate::snapshot::{PolarityTotals, RankedLemma, Snapshot, SourceTotals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateSettings {
    /// Context samples kept per polarity, in first-seen order. Early
    /// documents are over-represented; the samples illustrate, they do
    /// not estimate.
    pub context_cap: usize,
    /// Entries kept in each global ranking.
    pub top_n: usize,
    /// Entries kept in each per-source ranking.
    pub source_top_n: usize,
    /// Smallest count a ranking entry may carry.
    pub min_rank_count: u64,
}

impl Default for AggregateSettings {
    fn default() -> Self {
        AggregateSettings {
            context_cap: 20,
            top_n: 50,
            source_top_n: 10,
            min_rank_count: 1,
        }
    }
}

/// Accumulates analyses into monotonic counters.
///
/// Every key is an ordered map, so two runs over the same documents yield
/// identical snapshots. [`AggregateStore::finalize`] borrows immutably and
/// is safe to call on a partially populated store; the counts so far are
/// simply the counts so far.
#[derive(Debug)]
pub struct AggregateStore {
    lexicon: Arc<LexiconRegistry>,
    settings: AggregateSettings,
    filter_mode: MorphologyMode,
    totals: PolarityTotals,
    level_lemmas: BTreeMap<ExtractionLevel, BTreeMap<String, u64>>,
    sources: BTreeMap<String, SourceTotals>,
    yearly: BTreeMap<String, BTreeMap<i32, BTreeMap<String, u64>>>,
    category_totals: BTreeMap<String, u64>,
    relation_counts: BTreeMap<String, u64>,
    positive_contexts: Vec<String>,
    negative_contexts: Vec<String>,
    documents: u64,
    target_mentions: u64,
    related_mentions: u64,
    defective_tokens: u64,
    lexicon_misses: u64,
    suffix_admissions: u64,
    intensified: u64,
    attenuated: u64,
}

impl AggregateStore {
    pub fn new(
        lexicon: Arc<LexiconRegistry>,
        settings: AggregateSettings,
        filter_mode: MorphologyMode,
    ) -> Self {
        AggregateStore {
            lexicon,
            settings,
            filter_mode,
            totals: PolarityTotals::default(),
            level_lemmas: BTreeMap::new(),
            sources: BTreeMap::new(),
            yearly: BTreeMap::new(),
            category_totals: BTreeMap::new(),
            relation_counts: BTreeMap::new(),
            positive_contexts: Vec::new(),
            negative_contexts: Vec::new(),
            documents: 0,
            target_mentions: 0,
            related_mentions: 0,
            defective_tokens: 0,
            lexicon_misses: 0,
            suffix_admissions: 0,
            intensified: 0,
            attenuated: 0,
        }
    }

    /// Fold one document's analysis into the store.
    pub fn absorb(&mut self, analysis: DocumentAnalysis) {
        let DocumentAnalysis {
            meta,
            candidates,
            target_mentions,
            related_mentions,
            defective_tokens,
        } = analysis;
        self.documents += 1;
        self.target_mentions += target_mentions as u64;
        self.related_mentions += related_mentions as u64;
        self.defective_tokens += defective_tokens as u64;
        let source = self.sources.entry(meta.source_id.clone()).or_default();
        source.documents += 1;
        source.mentions += (target_mentions + related_mentions) as u64;
        for candidate in candidates {
            self.record(&meta, candidate);
        }
    }

    /// Record one candidate.
    ///
    /// Window-level candidates feed the per-level table, the relation
    /// tally and the audit counters only; the polarity, source, category
    /// and yearly totals come from the dependency-grounded levels alone,
    /// so the permissive strategy never inflates them.
    pub fn record(&mut self, meta: &DocMeta, candidate: Candidate) {
        *self
            .relation_counts
            .entry(candidate.relation.label().to_string())
            .or_insert(0) += 1;
        if !candidate.polarity.is_evaluative() {
            self.lexicon_misses += 1;
        }
        if candidate.suffix_admitted {
            self.suffix_admissions += 1;
        }
        match candidate.intensity {
            Intensity::Intensified => self.intensified += 1,
            Intensity::Attenuated => self.attenuated += 1,
            Intensity::Plain => {}
        }
        *self
            .level_lemmas
            .entry(candidate.level)
            .or_default()
            .entry(candidate.lemma.clone())
            .or_insert(0) += 1;
        if !candidate.level.is_dependency_grounded() {
            return;
        }

        match candidate.polarity {
            Polarity::Positive => self.totals.positive += 1,
            Polarity::Negative => self.totals.negative += 1,
            Polarity::Neutral => self.totals.neutral += 1,
        }
        let categories: Vec<String> = self
            .lexicon
            .taxonomy()
            .categorize(&candidate.lemma)
            .into_iter()
            .map(String::from)
            .collect();
        for name in categories {
            *self.category_totals.entry(name).or_insert(0) += 1;
        }

        let source = self.sources.entry(meta.source_id.clone()).or_default();
        match candidate.polarity {
            Polarity::Positive => {
                *source.positive.entry(candidate.lemma.clone()).or_insert(0) += 1;
            }
            Polarity::Negative => {
                *source.negative.entry(candidate.lemma.clone()).or_insert(0) += 1;
            }
            Polarity::Neutral => {}
        }
        if let Some(year) = meta.year {
            *self
                .yearly
                .entry(meta.source_id.clone())
                .or_default()
                .entry(year)
                .or_default()
                .entry(candidate.lemma.clone())
                .or_insert(0) += 1;
        }
        match candidate.polarity {
            Polarity::Positive if self.positive_contexts.len() < self.settings.context_cap => {
                self.positive_contexts.push(candidate.context);
            }
            Polarity::Negative if self.negative_contexts.len() < self.settings.context_cap => {
                self.negative_contexts.push(candidate.context);
            }
            _ => {}
        }
    }

    /// Immutable snapshot of the counts so far.
    pub fn finalize(&self) -> Snapshot {
        let evaluative = self.totals.evaluative();
        let (percent_positive, percent_negative) = if evaluative == 0 {
            (0.0, 0.0)
        } else {
            (
                self.totals.positive as f64 * 100.0 / evaluative as f64,
                self.totals.negative as f64 * 100.0 / evaluative as f64,
            )
        };

        let mut global_positive: BTreeMap<String, u64> = BTreeMap::new();
        let mut global_negative: BTreeMap<String, u64> = BTreeMap::new();
        for source in self.sources.values() {
            for (lemma, count) in &source.positive {
                *global_positive.entry(lemma.clone()).or_insert(0) += count;
            }
            for (lemma, count) in &source.negative {
                *global_negative.entry(lemma.clone()).or_insert(0) += count;
            }
        }

        let mut totals_by_source = self.sources.clone();
        for source in totals_by_source.values_mut() {
            source.top_positive = rank(
                &source.positive,
                self.settings.source_top_n,
                self.settings.min_rank_count,
            );
            source.top_negative = rank(
                &source.negative,
                self.settings.source_top_n,
                self.settings.min_rank_count,
            );
        }

        let window_total: u64 = self
            .level_lemmas
            .get(&ExtractionLevel::Window)
            .map(|lemmas| lemmas.values().sum())
            .unwrap_or(0);
        let dependency_total: u64 = self
            .level_lemmas
            .iter()
            .filter(|(level, _)| level.is_dependency_grounded())
            .map(|(_, lemmas)| lemmas.values().sum::<u64>())
            .sum();
        let window_to_dependency_ratio = if dependency_total == 0 {
            None
        } else {
            Some(window_total as f64 / dependency_total as f64)
        };

        Snapshot {
            totals_by_polarity: self.totals,
            percent_positive,
            percent_negative,
            totals_by_level: self.level_lemmas.clone(),
            totals_by_source,
            totals_by_category: self.category_totals.clone(),
            top_positive: rank(
                &global_positive,
                self.settings.top_n,
                self.settings.min_rank_count,
            ),
            top_negative: rank(
                &global_negative,
                self.settings.top_n,
                self.settings.min_rank_count,
            ),
            sample_contexts_positive: self.positive_contexts.clone(),
            sample_contexts_negative: self.negative_contexts.clone(),
            relation_counts: self.relation_counts.clone(),
            documents_processed: self.documents,
            target_mentions: self.target_mentions,
            related_mentions: self.related_mentions,
            defective_tokens: self.defective_tokens,
            lexicon_misses: self.lexicon_misses,
            suffix_admissions: self.suffix_admissions,
            intensified: self.intensified,
            attenuated: self.attenuated,
            window_to_dependency_ratio,
            filter_mode: self.filter_mode,
        }
    }

    /// Per-year lemma counts for one source, the temporal analyzer's
    /// input. Only dependency-grounded candidates with a known year land
    /// here.
    pub fn yearly_counts(&self, source_id: &str) -> Option<&BTreeMap<i32, BTreeMap<String, u64>>> {
        self.yearly.get(source_id)
    }

    pub fn source_ids(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }
}

/// Count-descending ranking with lemma order breaking ties.
fn rank(counts: &BTreeMap<String, u64>, top_n: usize, floor: u64) -> Vec<RankedLemma> {
    let mut entries: Vec<RankedLemma> = counts
        .iter()
        .filter(|(_, &count)| count >= floor)
        .map(|(lemma, &count)| RankedLemma {
            lemma: lemma.clone(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.lemma.cmp(&b.lemma)));
    entries.truncate(top_n);
    entries
}
