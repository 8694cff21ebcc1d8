//! Terminal rendering of a document analysis, for debugging and tests.

use std::collections::BTreeSet;
use std::fmt;

use unicode_width::UnicodeWidthStr;

use appraisal_nlp::Document;

use crate::analyzer::DocumentAnalysis;
use crate::extract::Candidate;
use crate::polarity::Intensity;

// música  no  es  buena
// ╰────╯ mention
//                 ╰───╯ direct bueno negative (negated)
//                 ╰───╯ window bueno negative (negated)
//                 ╰───╯ predicative bueno negative (negated)
pub struct AnalysisDisplay<'a> {
    doc: &'a Document,
    analysis: &'a DocumentAnalysis,
}

impl<'a> AnalysisDisplay<'a> {
    pub fn new(doc: &'a Document, analysis: &'a DocumentAnalysis) -> Self {
        AnalysisDisplay { doc, analysis }
    }
}

impl fmt::Display for AnalysisDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut starts = Vec::new();
        let mut ends = Vec::new();
        let mut opening_line = String::new();
        let mut is_first = true;
        for token in self.doc.tokens() {
            if is_first {
                is_first = false;
            } else {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            starts.push(UnicodeWidthStr::width(opening_line.as_str()));
            opening_line.push_str(token.surface());
            ends.push(UnicodeWidthStr::width(opening_line.as_str()));
        }
        f.write_str(&opening_line)?;

        let mention_indices: BTreeSet<usize> = self
            .analysis
            .candidates
            .iter()
            .map(|c| c.mention_index)
            .collect();
        for index in mention_indices {
            underline(f, &starts, &ends, index, "mention")?;
        }
        for candidate in &self.analysis.candidates {
            underline(f, &starts, &ends, candidate.token_index, &label(candidate))?;
        }
        Ok(())
    }
}

fn underline(
    f: &mut fmt::Formatter<'_>,
    starts: &[usize],
    ends: &[usize],
    index: usize,
    label: &str,
) -> fmt::Result {
    let (Some(&start), Some(&end)) = (starts.get(index), ends.get(index)) else {
        return Ok(());
    };
    f.write_str("\n")?;
    for _ in 0..start {
        f.write_str(" ")?;
    }
    f.write_str("╰")?;
    for _ in (start + 1)..end.saturating_sub(1) {
        f.write_str("─")?;
    }
    if end - start > 1 {
        f.write_str("╯")?;
    }
    write!(f, " {}", label)
}

fn label(candidate: &Candidate) -> String {
    let mut label = format!(
        "{} {} {}",
        candidate.level, candidate.lemma, candidate.polarity
    );
    let mut marks: Vec<&str> = Vec::new();
    if candidate.negated {
        marks.push("negated");
    }
    match candidate.intensity {
        Intensity::Intensified => marks.push("intensified"),
        Intensity::Attenuated => marks.push("attenuated"),
        Intensity::Plain => {}
    }
    if !marks.is_empty() {
        label.push_str(" (");
        label.push_str(&marks.join(", "));
        label.push(')');
    }
    label
}
