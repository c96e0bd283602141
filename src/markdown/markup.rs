//! Style tag catalog for the markdown converter.
//!
//! [`Markdown`] is the semantic label attached to every character run in a
//! tagged buffer. Two values are special: `Plain` marks unstyled content and
//! `Syntax` marks markup delimiter characters that the decoder strips out.
//! Every other value names a visible style that the host surface maps to
//! display attributes; this crate never inspects that mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic style tag for a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Markdown {
    /// Unstyled content.
    Plain,
    /// Markup delimiter characters, removed during decoding.
    Syntax,
    /// Level-one header line (`# `).
    Header1,
    /// Level-two header line (`## `).
    Header2,
    /// Level-three header line (`### `).
    Header3,
    /// Strong emphasis (`**`).
    Bold,
    /// Emphasis (`_`).
    Italic,
    /// Inline code (`` ` ``).
    Code,
    /// List item line (`- `, `* `, `+ `, or `1. `).
    ListItem,
}

/// How a style tag is written back out as markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Text is emitted unchanged.
    Verbatim,
    /// Text is enclosed by the delimiter on both sides.
    Wrap(&'static str),
    /// Text is prefixed by the marker and always completes a line.
    LinePrefix(&'static str),
}

impl Markdown {
    /// Returns the rule used when converting a run of this tag back to markup.
    ///
    /// Canonical re-encoding of list items always uses the `- ` bullet, even
    /// when the run was decoded from a `* `, `+ `, or `1. ` line.
    pub fn encoding(self) -> Encoding {
        match self {
            Markdown::Plain | Markdown::Syntax => Encoding::Verbatim,
            Markdown::Header1 => Encoding::LinePrefix("# "),
            Markdown::Header2 => Encoding::LinePrefix("## "),
            Markdown::Header3 => Encoding::LinePrefix("### "),
            Markdown::Bold => Encoding::Wrap("**"),
            Markdown::Italic => Encoding::Wrap("_"),
            Markdown::Code => Encoding::Wrap("`"),
            Markdown::ListItem => Encoding::LinePrefix("- "),
        }
    }

    /// True for tags the host surface renders as visible styling.
    pub fn is_visible_style(self) -> bool {
        !matches!(self, Markdown::Plain | Markdown::Syntax)
    }

    /// Stable lowercase name, identical to the serialized representation.
    pub fn name(self) -> &'static str {
        match self {
            Markdown::Plain => "plain",
            Markdown::Syntax => "syntax",
            Markdown::Header1 => "header1",
            Markdown::Header2 => "header2",
            Markdown::Header3 => "header3",
            Markdown::Bold => "bold",
            Markdown::Italic => "italic",
            Markdown::Code => "code",
            Markdown::ListItem => "list_item",
        }
    }
}

impl fmt::Display for Markdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
