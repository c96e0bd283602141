//! Range/tag store shared by the decoder and encoder.
//!
//! [`TaggedText`] keeps an ordered list of [`TagSpan`]s that is always
//! gap-free, non-overlapping, and maximal: the union of the ranges is exactly
//! `[0, text.len())`, zero-width spans are never stored, and adjacent spans
//! carry different tags. Because the list is maximal, iterating spans is the
//! same as iterating runs.
//!
//! Offsets are byte indices into the UTF-8 text, the single unit used through
//! the whole pipeline. Every range originates at a regex match boundary, so a
//! span never splits a character.

use super::markup::Markdown;
use std::ops::Range;

/// A tagged range over the owning buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpan {
    /// Byte range into the owning text.
    pub range: Range<usize>,
    /// Style tag covering the whole range.
    pub markdown: Markdown,
}

/// Text with a full-coverage style tag assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedText {
    text: String,
    spans: Vec<TagSpan>,
}

impl TaggedText {
    /// Creates tagged text with the whole buffer tagged `Plain`.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let spans = if text.is_empty() {
            Vec::new()
        } else {
            vec![TagSpan {
                range: 0..text.len(),
                markdown: Markdown::Plain,
            }]
        };
        TaggedText { text, spans }
    }

    /// Builds tagged text from `(content, tag)` runs.
    ///
    /// Contents are concatenated in order; empty runs are skipped and
    /// adjacent runs sharing a tag collapse into one span.
    pub fn from_runs<'a, I>(runs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Markdown)>,
    {
        let mut text = String::new();
        let mut spans: Vec<TagSpan> = Vec::new();
        for (content, markdown) in runs {
            if content.is_empty() {
                continue;
            }
            let start = text.len();
            text.push_str(content);
            match spans.last_mut() {
                Some(last) if last.markdown == markdown => last.range.end = text.len(),
                _ => spans.push(TagSpan {
                    range: start..text.len(),
                    markdown,
                }),
            }
        }
        TaggedText { text, spans }
    }

    /// The underlying text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True when the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Spans in document order.
    pub fn spans(&self) -> &[TagSpan] {
        &self.spans
    }

    /// The tag at a byte offset, or `None` past the end of the buffer.
    pub fn markdown_at(&self, offset: usize) -> Option<Markdown> {
        self.spans
            .iter()
            .find(|span| span.range.contains(&offset))
            .map(|span| span.markdown)
    }

    /// Maximal same-tag runs as `(content, tag)` pairs.
    pub fn runs(&self) -> impl Iterator<Item = (&str, Markdown)> + '_ {
        self.spans
            .iter()
            .map(move |span| (&self.text[span.range.clone()], span.markdown))
    }

    /// Retags `range` with `markdown` wherever the current tag satisfies
    /// `overridable`, splitting partially covered spans and re-merging equal
    /// neighbors. Offsets whose current tag is not overridable keep it.
    pub(crate) fn retag_where<F>(&mut self, range: Range<usize>, markdown: Markdown, overridable: F)
    where
        F: Fn(Markdown) -> bool,
    {
        if range.start >= range.end {
            return;
        }
        let mut next: Vec<TagSpan> = Vec::with_capacity(self.spans.len() + 2);
        for span in self.spans.drain(..) {
            let left = span.range.start..span.range.end.min(range.start);
            let mid = span.range.start.max(range.start)..span.range.end.min(range.end);
            let right = span.range.start.max(range.end)..span.range.end;

            if left.start < left.end {
                push_merged(&mut next, left, span.markdown);
            }
            if mid.start < mid.end {
                let tag = if overridable(span.markdown) {
                    markdown
                } else {
                    span.markdown
                };
                push_merged(&mut next, mid, tag);
            }
            if right.start < right.end {
                push_merged(&mut next, right, span.markdown);
            }
        }
        self.spans = next;
    }

    /// Returns a copy with every span tagged `target` deleted and all
    /// surviving spans remapped onto the shorter buffer.
    ///
    /// A single left-to-right copy pass: surviving offsets only ever shift
    /// down, so no later range is invalidated by an earlier deletion.
    pub fn strip(&self, target: Markdown) -> TaggedText {
        let mut text = String::with_capacity(self.text.len());
        let mut spans: Vec<TagSpan> = Vec::new();
        for span in &self.spans {
            if span.markdown == target {
                continue;
            }
            let start = text.len();
            text.push_str(&self.text[span.range.clone()]);
            match spans.last_mut() {
                Some(last) if last.markdown == span.markdown => last.range.end = text.len(),
                _ => spans.push(TagSpan {
                    range: start..text.len(),
                    markdown: span.markdown,
                }),
            }
        }
        TaggedText { text, spans }
    }
}

fn push_merged(spans: &mut Vec<TagSpan>, range: Range<usize>, markdown: Markdown) {
    match spans.last_mut() {
        Some(last) if last.markdown == markdown && last.range.end == range.start => {
            last.range.end = range.end;
        }
        _ => spans.push(TagSpan { range, markdown }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covered(tagged: &TaggedText) {
        let mut cursor = 0;
        for span in tagged.spans() {
            assert_eq!(span.range.start, cursor);
            assert!(span.range.end > span.range.start);
            cursor = span.range.end;
        }
        assert_eq!(cursor, tagged.len());
    }

    #[test]
    fn plain_covers_whole_buffer() {
        let tagged = TaggedText::plain("hello");
        assert_covered(&tagged);
        assert_eq!(tagged.spans().len(), 1);
        assert_eq!(tagged.markdown_at(0), Some(Markdown::Plain));
        assert_eq!(tagged.markdown_at(4), Some(Markdown::Plain));
        assert_eq!(tagged.markdown_at(5), None);
    }

    #[test]
    fn plain_empty_has_no_spans() {
        let tagged = TaggedText::plain("");
        assert!(tagged.is_empty());
        assert!(tagged.spans().is_empty());
    }

    #[test]
    fn from_runs_merges_adjacent_same_tag() {
        let tagged = TaggedText::from_runs([
            ("Bold ", Markdown::Bold),
            ("Bold", Markdown::Bold),
            ("", Markdown::Plain),
            ("end", Markdown::Plain),
        ]);
        assert_covered(&tagged);
        assert_eq!(tagged.text(), "Bold Boldend");
        let runs: Vec<_> = tagged.runs().collect();
        assert_eq!(
            runs,
            vec![("Bold Bold", Markdown::Bold), ("end", Markdown::Plain)]
        );
    }

    #[test]
    fn retag_splits_partially_covered_spans() {
        let mut tagged = TaggedText::plain("abcdef");
        tagged.retag_where(2..4, Markdown::Bold, |current| current == Markdown::Plain);
        assert_covered(&tagged);
        assert_eq!(
            tagged.spans(),
            &[
                TagSpan {
                    range: 0..2,
                    markdown: Markdown::Plain
                },
                TagSpan {
                    range: 2..4,
                    markdown: Markdown::Bold
                },
                TagSpan {
                    range: 4..6,
                    markdown: Markdown::Plain
                },
            ]
        );
    }

    #[test]
    fn retag_respects_override_policy() {
        let mut tagged = TaggedText::plain("abcdef");
        tagged.retag_where(0..3, Markdown::Header1, |current| current == Markdown::Plain);
        // Content writes never displace an earlier semantic claim.
        tagged.retag_where(1..5, Markdown::Bold, |current| current == Markdown::Plain);
        assert_covered(&tagged);
        assert_eq!(tagged.markdown_at(1), Some(Markdown::Header1));
        assert_eq!(tagged.markdown_at(3), Some(Markdown::Bold));
    }

    #[test]
    fn retag_remerges_equal_neighbors() {
        let mut tagged = TaggedText::plain("abcdef");
        tagged.retag_where(2..4, Markdown::Bold, |_| true);
        tagged.retag_where(2..4, Markdown::Plain, |_| true);
        assert_covered(&tagged);
        assert_eq!(tagged.spans().len(), 1);
    }

    #[test]
    fn retag_ignores_empty_ranges() {
        let mut tagged = TaggedText::plain("abc");
        tagged.retag_where(1..1, Markdown::Bold, |_| true);
        assert_eq!(tagged.spans().len(), 1);
    }

    #[test]
    fn strip_remaps_surviving_spans() {
        let mut tagged = TaggedText::plain("**Bold** x");
        tagged.retag_where(0..2, Markdown::Syntax, |_| true);
        tagged.retag_where(2..6, Markdown::Bold, |_| true);
        tagged.retag_where(6..8, Markdown::Syntax, |_| true);
        let stripped = tagged.strip(Markdown::Syntax);
        assert_covered(&stripped);
        assert_eq!(stripped.text(), "Bold x");
        assert_eq!(stripped.markdown_at(0), Some(Markdown::Bold));
        assert_eq!(stripped.markdown_at(4), Some(Markdown::Plain));
    }

    #[test]
    fn strip_merges_runs_that_become_adjacent() {
        let tagged = TaggedText::from_runs([
            ("a", Markdown::Plain),
            ("**", Markdown::Syntax),
            ("b", Markdown::Plain),
        ]);
        let stripped = tagged.strip(Markdown::Syntax);
        assert_eq!(stripped.text(), "ab");
        assert_eq!(stripped.spans().len(), 1);
    }
}
