//! Parsed representation of a Hyprland configuration file.
use serde::Serialize;

/// A single `key = value` line.
///
/// # Examples
///
/// ```
/// use hyprkeys::config::document::Entry;
///
/// let entry = Entry::new("gaps_in", "5");
/// assert_eq!(entry.key, "gaps_in");
/// assert!(!entry.is_variable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Text before the first `=`, trimmed.
    pub key: String,
    /// Text after the first `=`, trimmed, otherwise verbatim.
    pub value: String,
}

impl Entry {
    /// Create an entry from a key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Return `true` for `$name = value` declarations.
    #[must_use]
    pub fn is_variable(&self) -> bool {
        self.key.starts_with('$')
    }
}

/// One `name { ... }` region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Text before the opening brace, trimmed. Empty for `{` alone.
    pub name: String,
    /// Entries and nested blocks in source order.
    pub items: Vec<Item>,
}

impl Block {
    /// Create an empty block.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Append an entry, builder style.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.push(Item::Entry(Entry::new(key, value)));
        self
    }

    /// Append a nested block, builder style.
    #[must_use]
    pub fn with_block(mut self, block: Self) -> Self {
        self.items.push(Item::Block(block));
        self
    }

    /// Entries defined directly inside this block.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        entries_of(&self.items)
    }

    /// Blocks nested directly inside this block.
    pub fn children(&self) -> impl Iterator<Item = &Self> {
        blocks_of(&self.items)
    }

    /// First direct child block called `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children().find(|b| b.name == name)
    }

    /// Value of the first direct entry called `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }
}

/// An element of a block body or of the document root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    /// A `key = value` line.
    Entry(Entry),
    /// A nested `name { ... }` block.
    Block(Block),
}

/// Root of a parsed configuration file.
///
/// Top-level entries and blocks share one ordered sequence, so the relative
/// order between them is kept exactly as it appeared in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Top-level entries and blocks in source order.
    pub items: Vec<Item>,
}

impl Document {
    /// Create a document from top-level items.
    #[must_use]
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Return `true` if the document holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Top-level entries.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        entries_of(&self.items)
    }

    /// Top-level blocks.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        blocks_of(&self.items)
    }

    /// First top-level block called `name`.
    #[must_use]
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks().find(|b| b.name == name)
    }

    /// Top-level `$variable` declarations in source order.
    ///
    /// # Examples
    ///
    /// ```
    /// use hyprkeys::config::parser::parse;
    ///
    /// let doc = parse("$mainMod = SUPER\nmonitor = ,preferred,auto,1\n").unwrap();
    /// let vars: Vec<_> = doc.variables().map(|e| e.key.as_str()).collect();
    /// assert_eq!(vars, ["$mainMod"]);
    /// ```
    pub fn variables(&self) -> impl Iterator<Item = &Entry> {
        self.entries().filter(|e| e.is_variable())
    }

    /// Number of blocks at every depth.
    #[must_use]
    pub fn block_count(&self) -> usize {
        count(&self.items).0
    }

    /// Number of entries at every depth.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        count(&self.items).1
    }
}

fn entries_of(items: &[Item]) -> impl Iterator<Item = &Entry> {
    items.iter().filter_map(|item| match item {
        Item::Entry(entry) => Some(entry),
        Item::Block(_) => None,
    })
}

fn blocks_of(items: &[Item]) -> impl Iterator<Item = &Block> {
    items.iter().filter_map(|item| match item {
        Item::Block(block) => Some(block),
        Item::Entry(_) => None,
    })
}

/// `(blocks, entries)` below `items`, recursively.
fn count(items: &[Item]) -> (usize, usize) {
    items.iter().fold((0, 0), |(blocks, entries), item| match item {
        Item::Entry(_) => (blocks, entries + 1),
        Item::Block(block) => {
            let (b, e) = count(&block.items);
            (blocks + 1 + b, entries + e)
        }
    })
}
