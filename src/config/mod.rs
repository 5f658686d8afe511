//! Configuration loading for covcfg.
//!
//! This module handles:
//! - TOML document parsing
//! - Extracting the `[tool.coverage]` section of a project manifest
//! - Typed lookups of dotted field paths

pub mod parser;
pub mod path;

pub use parser::{
	COVERAGE_SECTION, extract_coverage_section, load_coverage_section, parse_document_file,
	parse_document_str,
};
pub use path::{FieldPath, lookup, lookup_mut, lookup_str, lookup_str_mut};
