use crate::error::{CovcfgError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Where the suite name for a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiteSource {
	/// An override document exists; the suite is named after its directory.
	Override { path: PathBuf, name: String },

	/// No override document; the argument itself is the suite name.
	Literal(String),
}

impl SuiteSource {
	/// Classify the second CLI argument as an override path or a suite name.
	pub fn resolve(covcfg_or_name: &str) -> Result<Self> {
		let path = Path::new(covcfg_or_name);

		if !path.exists() {
			log::debug!("{covcfg_or_name:?} does not exist, using it as the suite name");
			return Ok(SuiteSource::Literal(covcfg_or_name.to_string()));
		}

		let name = parent_dir_name(path)?;
		log::debug!("Using override {} for suite {name:?}", path.display());
		Ok(SuiteSource::Override {
			path: path.to_path_buf(),
			name,
		})
	}

	pub fn name(&self) -> &str {
		match self {
			SuiteSource::Override { name, .. } => name,
			SuiteSource::Literal(name) => name,
		}
	}

	pub fn override_path(&self) -> Option<&Path> {
		match self {
			SuiteSource::Override { path, .. } => Some(path),
			SuiteSource::Literal(_) => None,
		}
	}
}

/// Name of the directory containing `path`.
///
/// Relative paths without a named parent (`covcfg.toml`, `../covcfg.toml`)
/// are canonicalized first. Directory names that are not valid UTF-8 are
/// rejected.
fn parent_dir_name(path: &Path) -> Result<String> {
	let unavailable = || CovcfgError::SuiteNameUnavailable {
		path: path.to_path_buf(),
	};

	if let Some(name) = path.parent().and_then(Path::file_name) {
		return name.to_str().map(str::to_string).ok_or_else(unavailable);
	}

	let canonical = path
		.canonicalize()
		.map_err(|source| CovcfgError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	canonical
		.parent()
		.and_then(Path::file_name)
		.and_then(OsStr::to_str)
		.map(str::to_string)
		.ok_or_else(unavailable)
}
