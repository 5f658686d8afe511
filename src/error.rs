use std::path::PathBuf;

/// Library-level structured errors for covcfg.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum CovcfgError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Missing required field: {path}")]
	MissingField { path: String },

	#[error("Field is not a table: {path}")]
	FieldNotTable { path: String },

	#[error("Field is not a string: {path}")]
	FieldNotString { path: String },

	#[error("Cannot derive a suite name from override path: {path}")]
	SuiteNameUnavailable { path: PathBuf },

	#[error("Output path has no file name: {value:?}")]
	InvalidOutputPath { value: String },

	#[error("Failed to write coverage config")]
	WriteError {
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to serialize coverage config")]
	SerializeError {
		#[source]
		source: toml::ser::Error,
	},
}

/// Result type alias using CovcfgError.
pub type Result<T> = std::result::Result<T, CovcfgError>;
