//! Front-matter style configuration documents.
//!
//! A document is two `---`-delimited sections: a `config` section declaring
//! an agent, and an `output` section holding the derived command (or error)
//! written back by the generator. Sections preserve insertion order so a
//! rewritten file keeps its keys where the author put them.

use indexmap::IndexMap;

pub mod parser;
pub mod serializer;

pub use parser::{parse_document, parse_section};
pub use serializer::serialize_document;

/// A single configuration value: scalar string, scalar integer, or a list
/// of strings. Nested maps are deliberately unsupported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
    List(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Scalar rendering used when a value is spliced into a command line or
    /// an error message.
    pub fn to_text(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Int(n) => n.to_string(),
            Value::List(items) => items.join(", "),
        }
    }
}

/// An ordered key-value mapping parsed from one delimited segment.
///
/// Keys are unique; inserting an existing key replaces its value but keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: IndexMap<String, Value>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The pair of sections parsed from one file. Constructed fresh per file,
/// mutated only in `output`, serialized once, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub config: Section,
    pub output: Section,
}
