//! Temporal trend analysis over per-year lemma tables.
//!
//! One source's yearly counts are split into three contiguous periods and
//! the first and last are compared lemma by lemma. The split is by index
//! over the sorted year list: the first two periods take `len / 3` years
//! each and the remainder falls into the last period. That truncation is
//! the tie-break policy, stated rather than hidden.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::lexicon::LexiconRegistry;

/// Classification thresholds for emergent and declining lemmas.
///
/// Tuned on the corpus, not derived from a gold standard; moving them
/// moves lemmas between the lists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendThresholds {
    /// Relative change a lemma must exceed to be emergent.
    pub emergent_min_change: f64,
    /// Last-period rate an emergent lemma must reach.
    pub emergent_min_rate: f64,
    /// Relative change a lemma must fall below to be declining.
    pub declining_max_change: f64,
    /// First-period rate a declining lemma must have had.
    pub declining_min_rate: f64,
    /// Change reported when the first-period rate is zero. A fixed
    /// sentinel, not infinity, so the ranking stays well defined; the
    /// zero-base case still qualifies as emergent.
    pub zero_base_change: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        TrendThresholds {
            emergent_min_change: 100.0,
            emergent_min_rate: 1.0,
            declining_max_change: -50.0,
            declining_min_rate: 1.0,
            zero_base_change: 100.0,
        }
    }
}

/// Lemma counts over one contiguous run of years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub first_year: i32,
    pub last_year: i32,
    pub year_count: usize,
    pub counts: BTreeMap<String, u64>,
    pub total: u64,
    /// Category totals for the period; empty when the analyzer carries no
    /// taxonomy.
    pub category_counts: BTreeMap<String, u64>,
}

/// One lemma's movement between the first and last period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub lemma: String,
    pub change_pct: f64,
    pub rate_first: f64,
    pub rate_last: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalResult {
    pub years: Vec<i32>,
    pub periods: [PeriodSummary; 3],
    /// Change descending, lemma breaking ties.
    pub emergent: Vec<TrendEntry>,
    /// Change ascending, most negative first.
    pub declining: Vec<TrendEntry>,
}

/// Either a full analysis or an explicit refusal for thin data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TemporalOutcome {
    /// Fewer distinct years than the analyzer requires. Not an error.
    InsufficientRange { years_with_data: usize },
    Analyzed(TemporalResult),
}

impl TemporalOutcome {
    pub fn result(&self) -> Option<&TemporalResult> {
        match self {
            TemporalOutcome::Analyzed(result) => Some(result),
            TemporalOutcome::InsufficientRange { .. } => None,
        }
    }
}

pub struct TemporalAnalyzer {
    thresholds: TrendThresholds,
    min_years: usize,
    lexicon: Option<Arc<LexiconRegistry>>,
}

impl TemporalAnalyzer {
    pub fn new() -> Self {
        TemporalAnalyzer {
            thresholds: TrendThresholds::default(),
            min_years: 3,
            lexicon: None,
        }
    }

    pub fn with_thresholds(mut self, thresholds: TrendThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Attach a lexicon so period summaries carry category totals.
    pub fn with_lexicon(mut self, lexicon: Arc<LexiconRegistry>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    pub fn thresholds(&self) -> TrendThresholds {
        self.thresholds
    }

    pub fn analyze(&self, yearly: &BTreeMap<i32, BTreeMap<String, u64>>) -> TemporalOutcome {
        let years: Vec<i32> = yearly.keys().copied().collect();
        if years.len() < self.min_years {
            return TemporalOutcome::InsufficientRange {
                years_with_data: years.len(),
            };
        }

        let third = years.len() / 3;
        let slices = [
            &years[..third],
            &years[third..2 * third],
            &years[2 * third..],
        ];
        let periods = slices.map(|slice| self.summarize(yearly, slice));

        let mut lemmas: Vec<&String> = periods[0].counts.keys().collect();
        for lemma in periods[2].counts.keys() {
            if !periods[0].counts.contains_key(lemma) {
                lemmas.push(lemma);
            }
        }

        let mut emergent = Vec::new();
        let mut declining = Vec::new();
        for lemma in lemmas {
            let count_first = periods[0].counts.get(lemma).copied().unwrap_or(0);
            let count_last = periods[2].counts.get(lemma).copied().unwrap_or(0);
            let rate_first = count_first as f64 / periods[0].year_count as f64;
            let rate_last = count_last as f64 / periods[2].year_count as f64;
            let zero_base = rate_first == 0.0;
            let change_pct = if zero_base {
                self.thresholds.zero_base_change
            } else {
                (rate_last - rate_first) / rate_first * 100.0
            };
            let entry = TrendEntry {
                lemma: lemma.clone(),
                change_pct,
                rate_first,
                rate_last,
            };
            if (change_pct > self.thresholds.emergent_min_change || zero_base)
                && rate_last >= self.thresholds.emergent_min_rate
            {
                emergent.push(entry);
            } else if change_pct < self.thresholds.declining_max_change
                && rate_first >= self.thresholds.declining_min_rate
            {
                declining.push(entry);
            }
        }
        emergent.sort_by(|a, b| {
            b.change_pct
                .total_cmp(&a.change_pct)
                .then_with(|| a.lemma.cmp(&b.lemma))
        });
        declining.sort_by(|a, b| {
            a.change_pct
                .total_cmp(&b.change_pct)
                .then_with(|| a.lemma.cmp(&b.lemma))
        });

        TemporalOutcome::Analyzed(TemporalResult {
            years,
            periods,
            emergent,
            declining,
        })
    }

    fn summarize(
        &self,
        yearly: &BTreeMap<i32, BTreeMap<String, u64>>,
        slice: &[i32],
    ) -> PeriodSummary {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for year in slice {
            if let Some(lemmas) = yearly.get(year) {
                for (lemma, count) in lemmas {
                    *counts.entry(lemma.clone()).or_insert(0) += count;
                }
            }
        }
        let total = counts.values().sum();
        let mut category_counts: BTreeMap<String, u64> = BTreeMap::new();
        if let Some(lexicon) = &self.lexicon {
            for (lemma, count) in &counts {
                for name in lexicon.taxonomy().categorize(lemma) {
                    *category_counts.entry(String::from(name)).or_insert(0) += count;
                }
            }
        }
        PeriodSummary {
            first_year: slice.first().copied().unwrap_or(0),
            last_year: slice.last().copied().unwrap_or(0),
            year_count: slice.len(),
            counts,
            total,
            category_counts,
        }
    }
}

impl Default for TemporalAnalyzer {
    fn default() -> Self {
        TemporalAnalyzer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(i32, &[(&str, u64)])]) -> BTreeMap<i32, BTreeMap<String, u64>> {
        entries
            .iter()
            .map(|(year, lemmas)| {
                let lemmas = lemmas
                    .iter()
                    .map(|(lemma, count)| (String::from(*lemma), *count))
                    .collect();
                (*year, lemmas)
            })
            .collect()
    }

    #[test]
    fn two_years_are_not_enough() {
        let yearly = table(&[(1920, &[("bello", 3)]), (1921, &[("bello", 1)])]);
        assert_eq!(
            TemporalAnalyzer::new().analyze(&yearly),
            TemporalOutcome::InsufficientRange { years_with_data: 2 }
        );
    }

    #[test]
    fn remainder_years_fall_into_the_last_period() {
        // seven years split 2 / 2 / 3
        let yearly = table(&[
            (1918, &[("bello", 1)]),
            (1919, &[]),
            (1921, &[("bello", 1)]),
            (1923, &[]),
            (1925, &[]),
            (1927, &[]),
            (1930, &[("moderno", 2)]),
        ]);
        let outcome = TemporalAnalyzer::new().analyze(&yearly);
        let result = outcome.result().unwrap();
        assert_eq!(result.periods[0].year_count, 2);
        assert_eq!(result.periods[1].year_count, 2);
        assert_eq!(result.periods[2].year_count, 3);
        assert_eq!(result.periods[0].last_year, 1919);
        assert_eq!(result.periods[2].first_year, 1925);
        assert_eq!(result.periods[2].last_year, 1930);
    }

    #[test]
    fn zero_base_growth_uses_the_sentinel_and_is_emergent() {
        // six years split 2 / 2 / 2; "moderno" appears only late
        let yearly = table(&[
            (1918, &[("bello", 2)]),
            (1920, &[("bello", 2)]),
            (1922, &[("bello", 1)]),
            (1924, &[]),
            (1926, &[("moderno", 2), ("bello", 1)]),
            (1930, &[("moderno", 2)]),
        ]);
        let result = TemporalAnalyzer::new().analyze(&yearly);
        let result = result.result().unwrap();
        let moderno = result
            .emergent
            .iter()
            .find(|e| e.lemma == "moderno")
            .unwrap();
        assert_eq!(moderno.change_pct, 100.0);
        assert_eq!(moderno.rate_first, 0.0);
        assert_eq!(moderno.rate_last, 2.0);
    }

    #[test]
    fn declining_requires_rate_and_change_floors() {
        let yearly = table(&[
            (1918, &[("galante", 4), ("raro", 1)]),
            (1920, &[("galante", 2)]),
            (1922, &[]),
            (1924, &[]),
            (1926, &[("galante", 1)]),
            (1930, &[]),
        ]);
        let result = TemporalAnalyzer::new().analyze(&yearly);
        let result = result.result().unwrap();
        // galante: rate 3.0 -> 0.5, change about -83%
        let galante = result
            .declining
            .iter()
            .find(|e| e.lemma == "galante")
            .unwrap();
        assert!(galante.change_pct < -80.0 && galante.change_pct > -84.0);
        // raro dropped to zero but never reached the rate floor
        assert!(result.declining.iter().all(|e| e.lemma != "raro"));
    }

    #[test]
    fn lemmas_between_the_thresholds_are_simply_omitted() {
        let yearly = table(&[
            (1918, &[("bello", 2)]),
            (1920, &[("bello", 2)]),
            (1922, &[("bello", 2)]),
            (1924, &[("bello", 2)]),
            (1926, &[("bello", 2)]),
            (1930, &[("bello", 2)]),
        ]);
        let result = TemporalAnalyzer::new().analyze(&yearly);
        let result = result.result().unwrap();
        assert!(result.emergent.is_empty());
        assert!(result.declining.is_empty());
    }

    #[test]
    fn emergent_ranking_is_change_descending() {
        let yearly = table(&[
            (1918, &[("claro", 1)]),
            (1920, &[]),
            (1922, &[]),
            (1924, &[]),
            (1926, &[("claro", 8), ("nuevo", 4)]),
            (1930, &[("claro", 2), ("nuevo", 2)]),
        ]);
        let result = TemporalAnalyzer::new().analyze(&yearly);
        let result = result.result().unwrap();
        let order: Vec<&str> = result.emergent.iter().map(|e| e.lemma.as_str()).collect();
        // claro: 0.5 -> 5.0 is +900%; nuevo enters on the sentinel
        assert_eq!(order, vec!["claro", "nuevo"]);
    }

    #[test]
    fn period_summaries_can_carry_category_totals() {
        let yearly = table(&[
            (1918, &[("sinfónico", 2)]),
            (1920, &[]),
            (1922, &[]),
            (1924, &[]),
            (1926, &[("moderno", 3)]),
            (1930, &[]),
        ]);
        let analyzer = TemporalAnalyzer::new().with_lexicon(LexiconRegistry::spanish_music_press());
        let result = analyzer.analyze(&yearly);
        let result = result.result().unwrap();
        assert_eq!(result.periods[0].category_counts["Género musical"], 2);
        // moderno sits in both a genre and a novelty category
        assert_eq!(result.periods[2].category_counts["Género musical"], 3);
        assert_eq!(result.periods[2].category_counts["Novedad/Modernidad"], 3);
    }
}
