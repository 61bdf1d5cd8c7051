//! Render a [`Document`] back into configuration text.
use super::document::{Block, Document, Entry, Item};
use super::parser;

/// Spaces per nesting level used when no width is configured.
pub const DEFAULT_INDENT: usize = 4;

/// Widest indentation honoured; larger widths are clamped to it.
pub const MAX_INDENT: usize = 16;

/// Output formatting knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Spaces per nesting level, clamped to [`MAX_INDENT`].
    pub indent: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

/// Serialize with the default indentation.
///
/// # Examples
///
/// ```
/// use hyprkeys::config::document::{Block, Document, Item};
/// use hyprkeys::config::serializer::serialize;
///
/// let doc = Document::new(vec![Item::Block(Block::new("general").with_entry("gaps_in", "5"))]);
/// assert_eq!(serialize(&doc), "general {\n    gaps_in = 5\n}\n");
/// ```
#[must_use]
pub fn serialize(doc: &Document) -> String {
    serialize_with(doc, &SerializeOptions::default())
}

/// Serialize with explicit options.
///
/// Each entry becomes one `key = value` line and each block a `name {` line,
/// its indented body, and a lone `}`. Items keep their stored order.
#[must_use]
pub fn serialize_with(doc: &Document, options: &SerializeOptions) -> String {
    let mut out = String::new();
    write_items(&mut out, &doc.items, 0, options.indent.min(MAX_INDENT));
    out
}

/// Return `true` if serializing `doc` and parsing the result gives `doc` back.
///
/// Always holds for documents produced by the parser. A hand-built document
/// can fail it, e.g. an entry whose value ends in `{` re-parses as a block.
#[must_use]
pub fn round_trips(doc: &Document, options: &SerializeOptions) -> bool {
    parser::parse(&serialize_with(doc, options)).is_ok_and(|reparsed| reparsed == *doc)
}

fn write_items(out: &mut String, items: &[Item], depth: usize, width: usize) {
    let pad = " ".repeat(depth.saturating_mul(width));
    for item in items {
        match item {
            Item::Entry(entry) => push_line(out, &pad, &entry_line(entry)),
            Item::Block(block) => {
                push_line(out, &pad, &opener_line(block));
                write_items(out, &block.items, depth + 1, width);
                push_line(out, &pad, "}");
            }
        }
    }
}

fn push_line(out: &mut String, pad: &str, text: &str) {
    out.push_str(pad);
    out.push_str(text);
    out.push('\n');
}

fn entry_line(entry: &Entry) -> String {
    format!("{} = {}", entry.key, entry.value).trim().to_string()
}

fn opener_line(block: &Block) -> String {
    if block.name.is_empty() {
        "{".to_string()
    } else {
        format!("{} {{", block.name)
    }
}
