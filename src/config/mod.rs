//! Hyprland configuration: block model, parser, serializer, and the
//! settings and paths used to locate files.
pub mod document;
pub mod parser;
pub mod paths;
pub mod serializer;
pub mod settings;

pub use document::{Block, Document, Entry, Item};
pub use parser::{IgnoredLine, ParseReport, parse, parse_report};
pub use serializer::{SerializeOptions, serialize, serialize_with};
pub use settings::Settings;
