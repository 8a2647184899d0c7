//! # Agentgen
//!
//! A Rust CLI tool that turns declarative agent configuration files into
//! Claude CLI launch commands, rewriting each file in place with the
//! generated command or a validation error.
//!
//! ## Usage
//!
//! ```bash
//! agentgen "agents/,extra/*.yaml"
//! ```
//!
//! ## Modules
//!
//! - `catalog` - Immutable tool catalog and model table used for validation
//! - `document` - Front-matter document model, parser, and serializer
//! - `generate` - Command generation and validation for one config section
//! - `orchestrator` - Per-file processing loop and batch tally
//! - `paths` - Expansion of files, directories, and glob patterns
pub mod catalog;
pub mod document;
pub mod error;
pub mod generate;
pub mod orchestrator;
pub mod paths;

pub use error::{Error, Result};
