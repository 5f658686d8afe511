use crate::config::path::FieldPath;
use crate::error::{CovcfgError, Result};
use std::path::Path;
use toml::{Table, Value};

/// The section of a project manifest that holds coverage settings.
pub const COVERAGE_SECTION: FieldPath = FieldPath::new(&["tool", "coverage"]);

/// Parse a TOML document from the given path.
pub fn parse_document_file(path: &Path) -> Result<Table> {
	let content = std::fs::read_to_string(path).map_err(|source| CovcfgError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	log::debug!("Loaded {} ({} bytes)", path.display(), content.len());
	parse_document_str(&content, path)
}

/// Parse a TOML document from a string (useful for testing).
pub fn parse_document_str(content: &str, path: &Path) -> Result<Table> {
	toml::from_str(content).map_err(|source| CovcfgError::ConfigParseError {
		path: path.to_path_buf(),
		source,
	})
}

/// Detach the `[tool.coverage]` table from a parsed manifest.
pub fn extract_coverage_section(mut document: Table) -> Result<Table> {
	let missing = || CovcfgError::MissingField {
		path: COVERAGE_SECTION.to_string(),
	};

	let mut tool = match document.remove("tool") {
		Some(Value::Table(tool)) => tool,
		Some(_) => {
			return Err(CovcfgError::FieldNotTable {
				path: "tool".to_string(),
			});
		}
		None => return Err(missing()),
	};

	match tool.remove("coverage") {
		Some(Value::Table(section)) => Ok(section),
		Some(_) => Err(CovcfgError::FieldNotTable {
			path: COVERAGE_SECTION.to_string(),
		}),
		None => Err(missing()),
	}
}

/// Read a project manifest and return its coverage section.
pub fn load_coverage_section(path: &Path) -> Result<Table> {
	let document = parse_document_file(path)?;
	extract_coverage_section(document)
}
