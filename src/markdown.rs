//! Markdown conversion module
//!
//! This module provides the complete conversion pipeline between markup text
//! and tagged rich text:
//! 1. **Decoding**: markup text -> tagged text with the syntax stripped
//! 2. **Encoding**: tagged text -> canonical markup text
//!
//! The two directions are independent; they share only the span store
//! ([`TaggedText`]) and the style tag catalog ([`Markdown`]).
//!
//! ## Decoding
//!
//! ```rust,ignore
//! use tagdown::markdown::{decode, Markdown};
//!
//! let tagged = decode("Normal **Bold** Normal");
//! assert_eq!(tagged.text(), "Normal Bold Normal");
//! assert_eq!(tagged.markdown_at(7), Some(Markdown::Bold));
//! ```
//!
//! ## Encoding
//!
//! ```rust,ignore
//! use tagdown::markdown::{encode, Markdown, TaggedText};
//!
//! let tagged = TaggedText::from_runs([("Bold", Markdown::Bold)]);
//! assert_eq!(encode(&tagged), "**Bold**");
//! ```
//!
//! Which constructs are recognized is driven by a [`PatternTable`]; callers
//! that need a non-default feature set build one from [`MarkdownFeatures`]
//! and use [`decode_with`].

pub mod decoding;
pub mod encoding;
pub mod formats;
pub mod markup;
pub mod patterns;
pub mod spans;

pub use decoding::{decode, decode_with};
pub use encoding::encode;
pub use markup::{Encoding, Markdown};
pub use patterns::{MarkdownFeatures, PatternEntry, PatternError, PatternTable};
pub use spans::{TagSpan, TaggedText};
