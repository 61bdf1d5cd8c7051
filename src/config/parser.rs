//! Line-oriented block parser.
//!
//! Format:
//! ```text
//! # comment
//! $mainMod = SUPER
//! input {
//!     kb_layout = us
//!     touchpad {
//!         natural_scroll = true
//!     }
//! }
//! ```
//!
//! A line ending in `{` opens a block, a line that is exactly `}` closes one,
//! and any other line containing `=` is an entry. Everything else is ignored.
use serde::Serialize;

use super::document::{Block, Document, Entry, Item};
use crate::error::MalformedBlockError;

/// A line the parser skipped because it matched no rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredLine {
    /// 1-based line number.
    pub line: usize,
    /// Trimmed line content.
    pub text: String,
}

/// Parsed document together with the lines that were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    /// The parsed tree.
    pub document: Document,
    /// Unrecognized lines, in file order.
    pub ignored: Vec<IgnoredLine>,
}

/// Classification of one trimmed line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Skip,
    Open(&'a str),
    Close,
    Entry(&'a str, &'a str),
    Unrecognized,
}

/// A block that has been opened but not yet closed.
#[derive(Debug)]
struct OpenBlock {
    block: Block,
    line: usize,
}

/// Parse configuration text into a [`Document`].
///
/// # Examples
///
/// ```
/// use hyprkeys::config::parser::parse;
///
/// let doc = parse("general {\n  gaps_in = 5\n}\n").unwrap();
/// let general = doc.block("general").unwrap();
/// assert_eq!(general.get("gaps_in"), Some("5"));
/// ```
///
/// # Errors
///
/// Returns [`MalformedBlockError`] if a `}` has no matching opener or a block
/// is still open at end of input.
pub fn parse(text: &str) -> Result<Document, MalformedBlockError> {
    parse_report(text).map(|report| report.document)
}

/// Parse configuration text, also reporting the lines that were ignored.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_report(text: &str) -> Result<ParseReport, MalformedBlockError> {
    let mut root: Vec<Item> = Vec::new();
    let mut stack: Vec<OpenBlock> = Vec::new();
    let mut ignored = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        match classify(trimmed) {
            Line::Skip => {}
            Line::Open(name) => stack.push(OpenBlock {
                block: Block::new(name),
                line,
            }),
            Line::Close => {
                let open = stack
                    .pop()
                    .ok_or(MalformedBlockError::UnmatchedClose { line })?;
                current_items(&mut stack, &mut root).push(Item::Block(open.block));
            }
            Line::Entry(key, value) => {
                current_items(&mut stack, &mut root).push(Item::Entry(Entry::new(key, value)));
            }
            Line::Unrecognized => {
                tracing::trace!("ignoring line {line}: {trimmed}");
                ignored.push(IgnoredLine {
                    line,
                    text: trimmed.to_string(),
                });
            }
        }
    }

    if let Some(open) = stack.pop() {
        return Err(MalformedBlockError::Unclosed {
            name: open.block.name,
            line: open.line,
        });
    }

    Ok(ParseReport {
        document: Document::new(root),
        ignored,
    })
}

/// Item list of the innermost open block, or of the root when none is open.
fn current_items<'a>(stack: &'a mut [OpenBlock], root: &'a mut Vec<Item>) -> &'a mut Vec<Item> {
    match stack.last_mut() {
        Some(open) => &mut open.block.items,
        None => root,
    }
}

/// Classify an already trimmed line.
///
/// Block openers are checked before entries so `foo = bar {` opens a block.
fn classify(trimmed: &str) -> Line<'_> {
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Line::Skip;
    }
    if let Some(head) = trimmed.strip_suffix('{') {
        return Line::Open(head.trim());
    }
    if trimmed == "}" {
        return Line::Close;
    }
    trimmed
        .split_once('=')
        .map_or(Line::Unrecognized, |(key, value)| {
            Line::Entry(key.trim(), value.trim())
        })
}
