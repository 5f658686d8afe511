use crate::config::path::{FieldPath, lookup_mut, lookup_str, lookup_str_mut};
use crate::error::{CovcfgError, Result};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use toml::{Table, Value};

pub const DATA_FILE: FieldPath = FieldPath::new(&["run", "data_file"]);
pub const HTML_DIRECTORY: FieldPath = FieldPath::new(&["html", "directory"]);
pub const HTML_TITLE: FieldPath = FieldPath::new(&["html", "title"]);
pub const XML_OUTPUT: FieldPath = FieldPath::new(&["xml", "output"]);

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Report title for a suite, e.g. `Unit Test Coverage Report`.
pub fn report_title(suite: &str) -> String {
	format!("{} Test Coverage Report", capitalize(suite))
}

/// Insert `-{suite}` between the file stem and extension of `value`.
///
/// `.` components and repeated separators are dropped, so `./out/cov.xml`
/// becomes `out/cov-unit.xml`. A bare `cov.xml` becomes `./cov-unit.xml`.
pub fn suffixed_output_path(value: &str, suite: &str) -> Result<String> {
	let invalid = || CovcfgError::InvalidOutputPath {
		value: value.to_string(),
	};

	let path: PathBuf = Path::new(value)
		.components()
		.filter(|component| !matches!(component, Component::CurDir))
		.collect();

	let stem = path.file_stem().and_then(OsStr::to_str).ok_or_else(invalid)?;

	let extension = match path.extension() {
		Some(ext) => format!(".{}", ext.to_str().ok_or_else(invalid)?),
		None => String::new(),
	};

	let parent = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent.to_str().ok_or_else(invalid)?,
		_ => ".",
	};
	let separator = if parent.ends_with('/') { "" } else { "/" };

	Ok(format!("{parent}{separator}{stem}-{suite}{extension}"))
}

/// Namespace the coverage output locations of `section` with `suite`.
///
/// All four fields are resolved before anything is modified, so a missing
/// field leaves the section untouched.
pub fn rewrite_output_fields(section: &mut Table, suite: &str) -> Result<()> {
	let xml_output = suffixed_output_path(lookup_str(section, &XML_OUTPUT)?, suite)?;
	lookup_str(section, &DATA_FILE)?;
	lookup_str(section, &HTML_DIRECTORY)?;
	lookup_mut(section, &HTML_TITLE)?;

	lookup_str_mut(section, &DATA_FILE)?.push_str(&format!("-{suite}"));
	lookup_str_mut(section, &HTML_DIRECTORY)?.push_str(&format!("-{suite}"));
	*lookup_mut(section, &HTML_TITLE)? = Value::String(report_title(suite));
	*lookup_mut(section, &XML_OUTPUT)? = Value::String(xml_output);

	log::info!("Rewrote coverage output fields for suite {suite:?}");
	Ok(())
}
