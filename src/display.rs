//! Plain-text rendering of annotated documents for inspection and
//! snapshot tests.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::document::Document;

// 0  La        el        DET   det      1
// 1  música    música    NOUN  nsubj    3
// 2  es        ser       AUX   cop      3
// 3  bella     bello     ADJ   root     -
/// Renders one row per token with unicode-width-aligned columns
/// (index, surface, lemma, POS, relation, parent). Tokens carrying a tree
/// defect are marked with `!`, and the defects are listed below the table.
pub struct DocumentDisplay<'a> {
    document: &'a Document,
}

impl<'a> DocumentDisplay<'a> {
    pub fn new(document: &'a Document) -> Self {
        DocumentDisplay { document }
    }
}

impl<'a> fmt::Display for DocumentDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const GAP: usize = 2;

        let mut surface_width = 0;
        let mut lemma_width = 0;
        let mut pos_width = 0;
        let mut deprel_width = 0;
        for token in self.document.tokens() {
            surface_width = surface_width.max(UnicodeWidthStr::width(token.surface()));
            lemma_width = lemma_width.max(UnicodeWidthStr::width(token.lemma()));
            pos_width = pos_width.max(token.pos().as_str().len());
            deprel_width = deprel_width.max(UnicodeWidthStr::width(token.deprel().as_str()));
        }
        let index_width = self.document.len().saturating_sub(1).to_string().len();

        let pad = |f: &mut fmt::Formatter<'_>, text: &str, width: usize| -> fmt::Result {
            f.write_str(text)?;
            let used = UnicodeWidthStr::width(text);
            for _ in used..width + GAP {
                f.write_str(" ")?;
            }
            Ok(())
        };

        let mut first = true;
        for token in self.document.tokens() {
            if !first {
                f.write_str("\n")?;
            }
            first = false;

            pad(f, &format!("{:>width$}", token.index(), width = index_width), index_width)?;
            pad(f, token.surface(), surface_width)?;
            pad(f, token.lemma(), lemma_width)?;
            pad(f, token.pos().as_str(), pos_width)?;
            pad(f, token.deprel().as_str(), deprel_width)?;
            match token.parent() {
                Some(parent) => write!(f, "{}", parent)?,
                None => f.write_str("-")?,
            }
            if !self.document.is_sound(token.index()) {
                f.write_str("  !")?;
            }
        }

        for defect in self.document.tree_defects() {
            write!(f, "\n! {}", defect)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conllu::ConlluReader;
    use crate::document::DocMeta;

    #[test]
    fn renders_aligned_table() {
        let input = "\
1\tLa\tel\tDET\t_\t_\t2\tdet\t_\t_
2\tmúsica\tmúsica\tNOUN\t_\t_\t4\tnsubj\t_\t_
3\tes\tser\tAUX\t_\t_\t4\tcop\t_\t_
4\tbella\tbello\tADJ\t_\t_\t0\troot\t_\t_
";
        let doc = ConlluReader::new()
            .parse_str(input, DocMeta::new("ONDAS", "tabla.conllu"))
            .unwrap();

        insta::assert_snapshot!(DocumentDisplay::new(&doc).to_string(), @r###"
        0  La      el      DET   det    1
        1  música  música  NOUN  nsubj  3
        2  es      ser     AUX   cop    3
        3  bella   bello   ADJ   root   -
        "###);
    }

    #[test]
    fn marks_defective_tokens() {
        use crate::document::DocumentBuilder;
        use crate::token::{DepRel, PosTag, TokenInit};

        let mut builder = DocumentBuilder::new(DocMeta::new("ONDAS", "defecto.conllu"));
        builder.push(TokenInit::new("eco", "eco", PosTag::Noun, DepRel::Root, Some(0)));
        let doc = builder.finish();

        insta::assert_snapshot!(DocumentDisplay::new(&doc).to_string(), @r###"
        0  eco  eco  NOUN  root  0  !
        ! token 0 is its own parent
        "###);
    }
}
