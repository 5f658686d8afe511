use crate::error::{CovcfgError, Result};
use std::fmt;
use toml::{Table, Value};

/// A dotted key path into a nested TOML table, e.g. `html.directory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static [&'static str]);

impl FieldPath {
	pub const fn new(segments: &'static [&'static str]) -> Self {
		FieldPath(segments)
	}

	pub fn segments(&self) -> &'static [&'static str] {
		self.0
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.join("."))
	}
}

fn missing(path: &FieldPath) -> CovcfgError {
	CovcfgError::MissingField {
		path: path.to_string(),
	}
}

/// Look up the value at `path`, failing if any segment is absent.
pub fn lookup<'t>(table: &'t Table, path: &FieldPath) -> Result<&'t Value> {
	let (last, parents) = path.segments().split_last().ok_or_else(|| missing(path))?;

	let mut current = table;
	for segment in parents {
		current = match current.get(*segment) {
			Some(Value::Table(inner)) => inner,
			_ => return Err(missing(path)),
		};
	}

	current.get(*last).ok_or_else(|| missing(path))
}

/// Mutable counterpart of [`lookup`].
pub fn lookup_mut<'t>(table: &'t mut Table, path: &FieldPath) -> Result<&'t mut Value> {
	let (last, parents) = path.segments().split_last().ok_or_else(|| missing(path))?;

	let mut current = table;
	for segment in parents {
		current = match current.get_mut(*segment) {
			Some(Value::Table(inner)) => inner,
			_ => return Err(missing(path)),
		};
	}

	current.get_mut(*last).ok_or_else(|| missing(path))
}

/// Look up a string-valued field.
pub fn lookup_str<'t>(table: &'t Table, path: &FieldPath) -> Result<&'t str> {
	match lookup(table, path)? {
		Value::String(s) => Ok(s),
		_ => Err(CovcfgError::FieldNotString {
			path: path.to_string(),
		}),
	}
}

/// Look up a string-valued field for in-place editing.
pub fn lookup_str_mut<'t>(table: &'t mut Table, path: &FieldPath) -> Result<&'t mut String> {
	match lookup_mut(table, path)? {
		Value::String(s) => Ok(s),
		_ => Err(CovcfgError::FieldNotString {
			path: path.to_string(),
		}),
	}
}
