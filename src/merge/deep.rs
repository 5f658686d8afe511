use clap::ValueEnum;
use std::fmt;
use toml::{Table, Value};

/// How arrays present on both sides of a merge are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListStrategy {
	/// The override's array replaces the base array
	#[default]
	Replace,

	/// The override's items are appended to the base array
	Append,
}

impl fmt::Display for ListStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.to_possible_value() {
			Some(value) => f.write_str(value.get_name()),
			None => write!(f, "{self:?}"),
		}
	}
}

/// Merge `overlay` onto `base` in place.
///
/// Tables present on both sides are merged key by key. Any other value from
/// the overlay replaces the base value, except arrays under
/// [`ListStrategy::Append`], which are concatenated.
pub fn deep_merge(base: &mut Table, overlay: Table, strategy: ListStrategy) {
	for (key, incoming) in overlay {
		let replacement = match (base.get_mut(&key), incoming) {
			(Some(Value::Table(existing)), Value::Table(incoming)) => {
				deep_merge(existing, incoming, strategy);
				None
			}
			(Some(Value::Array(existing)), Value::Array(incoming))
				if strategy == ListStrategy::Append =>
			{
				existing.extend(incoming);
				None
			}
			(_, incoming) => Some(incoming),
		};

		if let Some(value) = replacement {
			base.insert(key, value);
		}
	}
}
