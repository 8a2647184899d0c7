//! Drives the read → parse → generate → serialize → write cycle for each
//! resolved file and keeps the batch tally.
//!
//! Files are processed sequentially and independently: any per-file failure
//! is logged and counted, never aborting the rest of the batch. A file with
//! a validation error is still rewritten, with the error recorded in its
//! output section, but counts as failed.

use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::catalog::Catalog;
use crate::document::{parse_document, serialize_document, Value};
use crate::error::Result;
use crate::generate::generate_command;

/// Outcome tally for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub succeeded: usize,
    pub failed: usize,
}

impl Summary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Process every path in order, returning the aggregate tally.
pub fn process_files<P: AsRef<Path>>(paths: &[P], catalog: &Catalog) -> Summary {
    let mut summary = Summary::default();
    for path in paths {
        if process_file(path.as_ref(), catalog) {
            summary.succeeded += 1;
        } else {
            summary.failed += 1;
        }
    }
    summary
}

/// Process one file, returning whether it counts as succeeded.
pub fn process_file(path: &Path, catalog: &Catalog) -> bool {
    info!("processing: {}", path.display());
    match rewrite_file(path, catalog) {
        Ok(ok) => ok,
        Err(e) => {
            error!("{} - {e}", path.display());
            false
        }
    }
}

fn rewrite_file(path: &Path, catalog: &Catalog) -> Result<bool> {
    let content = fs::read_to_string(path)?;
    let mut doc = parse_document(&content)?;

    let generated = generate_command(&doc.config, catalog);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    if generated.is_ok() {
        info!("{name} - command generated successfully");
    } else {
        error!("{name} - {}", generated.error);
    }

    let ok = generated.is_ok();
    doc.output.insert("command", Value::Str(generated.command));
    doc.output.insert("error", Value::Str(generated.error));

    fs::write(path, serialize_document(&doc))?;
    Ok(ok)
}
