//! Covcfg - per-suite coverage configuration for Python test runs.
//!
//! This library provides the core functionality for covcfg, including:
//! - Loading the `[tool.coverage]` section of a `pyproject.toml`
//! - Deep-merging a suite's `covcfg.toml` override onto it
//! - Namespacing data file, HTML and XML report locations by suite name
//! - Rendering the result back out as TOML
//!
//! # Example
//!
//! ```no_run
//! use covcfg::config::load_coverage_section;
//! use covcfg::emit::render_document;
//! use covcfg::merge::{ListStrategy, merge_and_rewrite};
//! use std::path::Path;
//!
//! let section = load_coverage_section(Path::new("pyproject.toml")).unwrap();
//! let merged = merge_and_rewrite(section, "tests/unit/covcfg.toml", ListStrategy::Replace).unwrap();
//! print!("{}", render_document(&merged).unwrap());
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod merge;

pub use error::{CovcfgError, Result};
