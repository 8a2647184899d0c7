//! Renders a [`Document`] back to the two-section delimited text form.
//!
//! Serialization is semantically round-trip-stable, not byte-for-byte:
//! every string value is re-quoted on output regardless of how it was
//! quoted on input, and comments do not survive.

use std::fmt::Write;

use super::{Document, Section, Value};

/// Render a document: delimiter, config section, delimiter, output section,
/// trailing newline.
pub fn serialize_document(doc: &Document) -> String {
    let mut out = String::from("---\n");
    write_section(&mut out, &doc.config);
    out.push_str("---\n");
    write_section(&mut out, &doc.output);
    out
}

fn write_section(out: &mut String, section: &Section) {
    for (key, value) in section.iter() {
        match value {
            Value::List(items) => {
                let _ = writeln!(out, "{key}:");
                for item in items {
                    let _ = writeln!(out, "  - \"{item}\"");
                }
            }
            Value::Str(s) => {
                let _ = writeln!(out, "{key}: \"{s}\"");
            }
            Value::Int(n) => {
                let _ = writeln!(out, "{key}: {n}");
            }
        }
    }
}
