//! # tagdown
//!
//! A bidirectional converter between a small markdown subset (headers, bold,
//! italic, lists, inline code) and tagged rich text, where each character run
//! carries a semantic style tag instead of markup punctuation.
//!
//! Decoding takes markup text, removes the syntax characters, and tags the
//! surviving content:
//!
//! ```text
//! "# Header\n"   ->  "Header\n"   with offset 0 tagged header1
//! "**Bold** x"   ->  "Bold x"     with offset 0 tagged bold
//! ```
//!
//! Encoding walks tagged runs the other way and emits minimal, canonical
//! markup that decodes back to equivalent styling.
//!
//! The library never touches display attributes (fonts, colors); it only
//! produces and consumes tag keys. See the [markdown] module for the API.

pub mod markdown;
