//! Declarative pattern table for markup recognition.
//!
//! Each rule pairs a style tag with a regex whose capture groups play fixed
//! roles: delimiter groups hold the markup punctuation (tagged `Syntax` and
//! later stripped) and a single content group holds the text that keeps the
//! rule's tag. Rules apply in declaration order, and line-anchored rules
//! (headers, list items) come before inline rules so a leading `#` is never
//! claimed by emphasis markup.
//!
//! Paired delimiters are spelled out explicitly with a lazy content group,
//! `(\*\*)(.+?)(\*\*)`, so `**a** x **b**` yields two separate matches and a
//! back-to-back pair with nothing between it never matches at all. Unpaired
//! delimiters simply fail to match and the text stays `Plain`.
//!
//! Role assignments are validated when the table is built; a bad rule is a
//! configuration error and can never surface mid-conversion.

use super::markup::Markdown;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which markup constructs a pattern table recognizes.
///
/// This is the crate's view of the host's style/feature configuration; it
/// deserializes from YAML or JSON for tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownFeatures {
    pub headers: bool,
    pub lists: bool,
    pub code: bool,
    pub bold: bool,
    pub italic: bool,
    /// Allow bold/italic content to run across line terminators. Off by
    /// default: emphasis is line-bounded.
    pub multiline_emphasis: bool,
}

impl Default for MarkdownFeatures {
    fn default() -> Self {
        MarkdownFeatures {
            headers: true,
            lists: true,
            code: true,
            bold: true,
            italic: true,
            multiline_emphasis: false,
        }
    }
}

/// Error raised while building a pattern table.
///
/// Construction is the only place these occur; a table that builds cleanly
/// never fails during an individual conversion call.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// The regex failed to compile.
    InvalidPattern { markdown: Markdown, message: String },
    /// A role points at a capture group the regex does not define.
    MissingCaptureGroup { markdown: Markdown, group: usize },
    /// The same capture group holds both the delimiter and the content role.
    OverlappingRoles { markdown: Markdown, group: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidPattern { markdown, message } => {
                write!(f, "Invalid pattern for '{markdown}': {message}")
            }
            PatternError::MissingCaptureGroup { markdown, group } => {
                write!(f, "Pattern for '{markdown}' has no capture group {group}")
            }
            PatternError::OverlappingRoles { markdown, group } => {
                write!(
                    f,
                    "Pattern for '{markdown}' assigns group {group} as both delimiter and content"
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// A compiled recognizer with its capture-group roles.
#[derive(Debug)]
pub struct PatternEntry {
    markdown: Markdown,
    regex: Regex,
    delimiter_groups: Vec<usize>,
    content_group: usize,
}

impl PatternEntry {
    /// Compiles a rule and validates its group roles.
    ///
    /// Group indices refer to the regex's capture groups (group 0, the whole
    /// match, is not a valid role). The content group must be distinct from
    /// every delimiter group.
    pub fn new(
        markdown: Markdown,
        pattern: &str,
        delimiter_groups: &[usize],
        content_group: usize,
    ) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|error| PatternError::InvalidPattern {
            markdown,
            message: error.to_string(),
        })?;
        let available = regex.captures_len();
        for &group in delimiter_groups.iter().chain([&content_group]) {
            if group == 0 || group >= available {
                return Err(PatternError::MissingCaptureGroup { markdown, group });
            }
        }
        if delimiter_groups.contains(&content_group) {
            return Err(PatternError::OverlappingRoles {
                markdown,
                group: content_group,
            });
        }
        Ok(PatternEntry {
            markdown,
            regex,
            delimiter_groups: delimiter_groups.to_vec(),
            content_group,
        })
    }

    /// The tag this rule assigns to its content capture.
    pub fn markdown(&self) -> Markdown {
        self.markdown
    }

    /// The compiled recognizer.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Capture groups tagged `Syntax` on every match.
    pub fn delimiter_groups(&self) -> &[usize] {
        &self.delimiter_groups
    }

    /// Capture group that keeps the rule's tag.
    pub fn content_group(&self) -> usize {
        self.content_group
    }
}

/// Ordered, immutable set of markup recognizers.
///
/// Declaration order is priority order. The table is built once and shared
/// by reference; it holds no mutable state.
#[derive(Debug)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    /// Builds the table for an enabled feature set.
    pub fn new(features: &MarkdownFeatures) -> Result<Self, PatternError> {
        let mut entries = Vec::new();
        if features.headers {
            entries.push(PatternEntry::new(
                Markdown::Header1,
                r"(?m)^(\#{1}[\t ]+)(.*)$",
                &[1],
                2,
            )?);
            entries.push(PatternEntry::new(
                Markdown::Header2,
                r"(?m)^(\#{2}[\t ]+)(.*)$",
                &[1],
                2,
            )?);
            entries.push(PatternEntry::new(
                Markdown::Header3,
                r"(?m)^(\#{3}[\t ]+)(.*)$",
                &[1],
                2,
            )?);
        }
        if features.lists {
            entries.push(PatternEntry::new(
                Markdown::ListItem,
                r"(?m)^([-*+][\t ]+)(.*)$",
                &[1],
                2,
            )?);
            entries.push(PatternEntry::new(
                Markdown::ListItem,
                r"(?m)^(\d+\.[\t ]+)(.*)$",
                &[1],
                2,
            )?);
        }
        if features.code {
            entries.push(PatternEntry::new(
                Markdown::Code,
                r"(`)([^`\n]+)(`)",
                &[1, 3],
                2,
            )?);
        }
        let content = if features.multiline_emphasis {
            r"((?s:.+?))"
        } else {
            r"(.+?)"
        };
        if features.bold {
            entries.push(PatternEntry::new(
                Markdown::Bold,
                &format!(r"(\*\*){content}(\*\*)"),
                &[1, 3],
                2,
            )?);
        }
        if features.italic {
            entries.push(PatternEntry::new(
                Markdown::Italic,
                &format!(r"(_){content}(_)"),
                &[1, 3],
                2,
            )?);
        }
        Ok(PatternTable { entries })
    }

    /// Builds a table from caller-supplied rules, in the given priority
    /// order. New markup kinds plug in here without touching the decoder.
    pub fn from_entries(entries: Vec<PatternEntry>) -> Self {
        PatternTable { entries }
    }

    /// Table with every construct enabled, built once on first use.
    pub fn default_table() -> &'static PatternTable {
        static DEFAULT: Lazy<PatternTable> = Lazy::new(|| {
            PatternTable::new(&MarkdownFeatures::default()).expect("built-in patterns are valid")
        });
        &DEFAULT
    }

    /// Rules in priority order.
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no construct is enabled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_orders_line_rules_before_inline_rules() {
        let table = PatternTable::default_table();
        let tags: Vec<Markdown> = table.entries().iter().map(|e| e.markdown()).collect();
        assert_eq!(
            tags,
            vec![
                Markdown::Header1,
                Markdown::Header2,
                Markdown::Header3,
                Markdown::ListItem,
                Markdown::ListItem,
                Markdown::Code,
                Markdown::Bold,
                Markdown::Italic,
            ]
        );
    }

    #[test]
    fn disabled_features_shrink_the_table() {
        let features = MarkdownFeatures {
            headers: false,
            lists: false,
            ..MarkdownFeatures::default()
        };
        let table = PatternTable::new(&features).unwrap();
        assert_eq!(table.len(), 3);
        assert!(table
            .entries()
            .iter()
            .all(|e| e.markdown().is_visible_style()));
    }

    #[test]
    fn invalid_regex_is_rejected_at_construction() {
        let result = PatternEntry::new(Markdown::Bold, r"(\*\*", &[1], 2);
        assert!(matches!(
            result,
            Err(PatternError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn out_of_range_group_is_rejected() {
        let result = PatternEntry::new(Markdown::Bold, r"(\*\*)(.+?)(\*\*)", &[1, 3], 4);
        assert_eq!(
            result.unwrap_err(),
            PatternError::MissingCaptureGroup {
                markdown: Markdown::Bold,
                group: 4
            }
        );
    }

    #[test]
    fn whole_match_group_is_not_a_valid_role() {
        let result = PatternEntry::new(Markdown::Bold, r"(\*\*)(.+?)(\*\*)", &[0], 2);
        assert_eq!(
            result.unwrap_err(),
            PatternError::MissingCaptureGroup {
                markdown: Markdown::Bold,
                group: 0
            }
        );
    }

    #[test]
    fn overlapping_roles_are_rejected() {
        let result = PatternEntry::new(Markdown::Bold, r"(\*\*)(.+?)(\*\*)", &[1, 2], 2);
        assert_eq!(
            result.unwrap_err(),
            PatternError::OverlappingRoles {
                markdown: Markdown::Bold,
                group: 2
            }
        );
    }

    #[test]
    fn errors_render_the_offending_tag() {
        let error = PatternError::MissingCaptureGroup {
            markdown: Markdown::Italic,
            group: 7,
        };
        assert_eq!(error.to_string(), "Pattern for 'italic' has no capture group 7");
    }

    #[test]
    fn features_deserialize_with_defaults() {
        let features: MarkdownFeatures = serde_yaml::from_str("bold: false\n").unwrap();
        assert!(!features.bold);
        assert!(features.italic);
        assert!(!features.multiline_emphasis);
    }
}
