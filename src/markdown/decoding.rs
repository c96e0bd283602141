//! Markup decoder: markup text to tagged rich text.
//!
//! Decoding runs every pattern-table rule once over the original source
//! text. Delimiter captures are tagged `Syntax` and content captures take
//! the rule's tag; afterwards every `Syntax` span is deleted in a single
//! left-to-right copy pass that remaps the surviving spans. Matching always
//! happens against the unmodified source, so the offsets the regex engine
//! reports stay valid for the whole tagging phase.
//!
//! Precedence between rules in one pass:
//! - delimiter captures set `Syntax` over any earlier tag except `Code`
//!   content (a recognized code span is opaque to later rules);
//! - content captures claim only offsets that are still `Plain`.

use super::markup::Markdown;
use super::patterns::PatternTable;
use super::spans::TaggedText;

/// Decodes markup text with the default pattern table.
pub fn decode(source: &str) -> TaggedText {
    decode_with(source, PatternTable::default_table())
}

/// Decodes markup text with a caller-supplied pattern table.
///
/// Unterminated or unpaired markup characters are not an error: no rule
/// matches them, they stay `Plain`, and they survive into the output
/// verbatim.
pub fn decode_with(source: &str, table: &PatternTable) -> TaggedText {
    let mut tagged = TaggedText::plain(source);
    for entry in table.entries() {
        for captures in entry.regex().captures_iter(source) {
            for &group in entry.delimiter_groups() {
                if let Some(capture) = captures.get(group) {
                    tagged.retag_where(capture.range(), Markdown::Syntax, |current| {
                        current != Markdown::Code
                    });
                }
            }
            if let Some(capture) = captures.get(entry.content_group()) {
                tagged.retag_where(capture.range(), entry.markdown(), |current| {
                    current == Markdown::Plain
                });
            }
        }
    }
    tagged.strip(Markdown::Syntax)
}
