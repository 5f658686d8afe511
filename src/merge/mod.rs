//! Merging and rewriting of a coverage section for one test suite.
//!
//! This module handles:
//! - Deep-merging an override document onto the base section
//! - Deriving the suite name from the override location or a literal
//! - Namespacing the coverage output fields with the suite name
//! - Sorting list values so output is deterministic

pub mod deep;
pub mod normalize;
pub mod rewrite;
pub mod suite;

pub use deep::{ListStrategy, deep_merge};
pub use normalize::{compare_values, sort_lists};
pub use rewrite::{capitalize, report_title, rewrite_output_fields, suffixed_output_path};
pub use suite::SuiteSource;

use crate::config::parse_document_file;
use crate::error::Result;
use toml::Table;

/// Apply an optional override, rename outputs for `suite`, and sort lists.
pub fn apply_suite(
	mut section: Table,
	overlay: Option<Table>,
	suite: &str,
	strategy: ListStrategy,
) -> Result<Table> {
	if let Some(overlay) = overlay {
		log::debug!("Merging {} override keys ({strategy})", overlay.len());
		deep_merge(&mut section, overlay, strategy);
	}

	rewrite_output_fields(&mut section, suite)?;
	sort_lists(&mut section);

	Ok(section)
}

/// Resolve `covcfg_or_name`, merge the override it names (if any) onto
/// `section`, and rewrite the result for that suite.
pub fn merge_and_rewrite(
	section: Table,
	covcfg_or_name: &str,
	strategy: ListStrategy,
) -> Result<Table> {
	let source = SuiteSource::resolve(covcfg_or_name)?;

	let overlay = source
		.override_path()
		.map(parse_document_file)
		.transpose()?;

	apply_suite(section, overlay, source.name(), strategy)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{lookup_str, parse_document_str};
	use crate::error::CovcfgError;
	use std::fs;
	use std::path::Path;

	const BASE: &str = r#"
[run]
data_file = "cov"
omit = ["tests/*", "setup.py"]

[html]
directory = "htmlcov"
title = "x"

[xml]
output = "out/cov.xml"
"#;

	fn base() -> Table {
		parse_document_str(BASE, Path::new("pyproject.toml")).unwrap()
	}

	fn field<'t>(table: &'t Table, section: &str, key: &str) -> &'t str {
		table[section][key].as_str().unwrap()
	}

	#[test]
	fn test_literal_name_scenario() {
		let result = merge_and_rewrite(base(), "unit", ListStrategy::Replace).unwrap();

		assert_eq!(field(&result, "run", "data_file"), "cov-unit");
		assert_eq!(field(&result, "html", "directory"), "htmlcov-unit");
		assert_eq!(field(&result, "html", "title"), "Unit Test Coverage Report");
		assert_eq!(field(&result, "xml", "output"), "out/cov-unit.xml");
	}

	#[test]
	fn test_lists_sorted_after_rewrite() {
		let result = merge_and_rewrite(base(), "unit", ListStrategy::Replace).unwrap();
		let omit: Vec<_> = result["run"]["omit"]
			.as_array()
			.unwrap()
			.iter()
			.filter_map(toml::Value::as_str)
			.collect();
		assert_eq!(omit, vec!["setup.py", "tests/*"]);
	}

	#[test]
	fn test_override_file_merges_and_names_suite() {
		let temp_dir = tempfile::tempdir().unwrap();
		let suite_dir = temp_dir.path().join("functional");
		fs::create_dir(&suite_dir).unwrap();
		let covcfg = suite_dir.join("covcfg.toml");
		fs::write(
			&covcfg,
			r#"
[run]
branch = true
data_file = "func"

[report]
show_missing = true
"#,
		)
		.unwrap();

		let result =
			merge_and_rewrite(base(), covcfg.to_str().unwrap(), ListStrategy::Replace).unwrap();

		assert_eq!(field(&result, "run", "data_file"), "func-functional");
		assert_eq!(result["run"]["branch"].as_bool(), Some(true));
		assert_eq!(result["report"]["show_missing"].as_bool(), Some(true));
		assert_eq!(
			field(&result, "html", "title"),
			"Functional Test Coverage Report"
		);
		assert_eq!(field(&result, "xml", "output"), "out/cov-functional.xml");
	}

	#[test]
	fn test_override_may_supply_missing_field() {
		let mut section = base();
		section.remove("xml");
		let overlay = parse_document_str(
			"[xml]\noutput = \"reports/coverage.xml\"\n",
			Path::new("covcfg.toml"),
		)
		.unwrap();

		let result = apply_suite(section, Some(overlay), "unit", ListStrategy::Replace).unwrap();
		assert_eq!(
			lookup_str(&result, &rewrite::XML_OUTPUT).unwrap(),
			"reports/coverage-unit.xml"
		);
	}

	#[test]
	fn test_missing_field_fails() {
		let mut section = base();
		section.remove("xml");

		let result = apply_suite(section, None, "unit", ListStrategy::Replace);
		assert!(matches!(result, Err(CovcfgError::MissingField { .. })));
	}

	#[test]
	fn test_malformed_override_fails() {
		let temp_dir = tempfile::tempdir().unwrap();
		let suite_dir = temp_dir.path().join("unit");
		fs::create_dir(&suite_dir).unwrap();
		let covcfg = suite_dir.join("covcfg.toml");
		fs::write(&covcfg, "not = [valid").unwrap();

		let result = merge_and_rewrite(base(), covcfg.to_str().unwrap(), ListStrategy::Replace);
		assert!(matches!(result, Err(CovcfgError::ConfigParseError { .. })));
	}
}
