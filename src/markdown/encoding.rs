//! Markup encoder: tagged rich text to canonical markup.
//!
//! The encoder walks the maximal same-tag runs in document order and wraps
//! or prefixes each one according to its tag's encoding rule. Adjacent runs
//! that share a tag were already merged by the span store, which is what
//! makes `"Bold "` + `"Bold"` come out as one `**Bold Bold**` pair instead
//! of two.

use super::markup::Encoding;
use super::spans::TaggedText;

/// Encodes tagged text as canonical markup.
///
/// `Plain` runs pass through unchanged. Well-formed input never contains
/// `Syntax` runs; any present are passed through the same way. Runs of
/// adjacent different tags are emitted back to back with no separator
/// beyond each run's own delimiters.
pub fn encode(tagged: &TaggedText) -> String {
    let spans = tagged.spans();
    let mut out = String::with_capacity(tagged.len() + spans.len() * 4);
    for (index, span) in spans.iter().enumerate() {
        let text = &tagged.text()[span.range.clone()];
        match span.markdown.encoding() {
            Encoding::Verbatim => out.push_str(text),
            Encoding::Wrap(delimiter) => {
                out.push_str(delimiter);
                out.push_str(text);
                out.push_str(delimiter);
            }
            Encoding::LinePrefix(marker) => {
                out.push_str(marker);
                out.push_str(text);
                // Prefixed constructs own a whole line; terminate it unless
                // the run or its successor already does.
                let next_starts_line = spans
                    .get(index + 1)
                    .is_some_and(|next| tagged.text()[next.range.clone()].starts_with('\n'));
                if !text.ends_with('\n') && !next_starts_line {
                    out.push('\n');
                }
            }
        }
    }
    out
}
