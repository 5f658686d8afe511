use std::cmp::Ordering;
use toml::{Table, Value};

/// Stably sort every array found anywhere under `table`.
pub fn sort_lists(table: &mut Table) {
	for (_, value) in table.iter_mut() {
		sort_value(value);
	}
}

fn sort_value(value: &mut Value) {
	match value {
		Value::Table(inner) => sort_lists(inner),
		Value::Array(items) => {
			for item in items.iter_mut() {
				sort_value(item);
			}
			items.sort_by(compare_values);
		}
		_ => {}
	}
}

// Cross-kind order: booleans, numbers, strings, datetimes, then composites.
fn kind_rank(value: &Value) -> u8 {
	match value {
		Value::Boolean(_) => 0,
		Value::Integer(_) | Value::Float(_) => 1,
		Value::String(_) => 2,
		Value::Datetime(_) => 3,
		Value::Array(_) => 4,
		Value::Table(_) => 5,
	}
}

/// Total order over TOML values used when sorting arrays.
///
/// Numbers compare by exact value regardless of integer or float
/// representation (`-0.0 == 0 == 0.0`); negative NaN sorts below every
/// number and positive NaN above. Arrays and tables compare equal to their
/// own kind, so a stable sort keeps their original relative order.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
	match (a, b) {
		(Value::Boolean(x), Value::Boolean(y)) => x.cmp(y),
		(Value::Integer(x), Value::Integer(y)) => x.cmp(y),
		(Value::Float(x), Value::Float(y)) => compare_floats(*x, *y),
		(Value::Integer(x), Value::Float(y)) => compare_int_float(*x, *y),
		(Value::Float(x), Value::Integer(y)) => compare_int_float(*y, *x).reverse(),
		(Value::String(x), Value::String(y)) => x.cmp(y),
		(Value::Datetime(x), Value::Datetime(y)) => x.to_string().cmp(&y.to_string()),
		_ => kind_rank(a).cmp(&kind_rank(b)),
	}
}

fn compare_floats(x: f64, y: f64) -> Ordering {
	x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y))
}

// 2^63 as f64; every float in [-2^63, 2^63) truncates to a valid i64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison of an integer with a float, without rounding the integer.
fn compare_int_float(int: i64, float: f64) -> Ordering {
	if float.is_nan() {
		return if float.is_sign_negative() {
			Ordering::Greater
		} else {
			Ordering::Less
		};
	}
	if float >= I64_BOUND {
		return Ordering::Less;
	}
	if float < -I64_BOUND {
		return Ordering::Greater;
	}

	let whole = float.trunc();
	match int.cmp(&(whole as i64)) {
		Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)).unwrap_or(Ordering::Equal),
		other => other,
	}
}
