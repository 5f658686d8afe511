use crate::error::{CovcfgError, Result};
use serde::Serialize;
use std::io::Write;
use toml::Table;

#[derive(Serialize)]
struct Manifest<'a> {
	tool: Tool<'a>,
}

#[derive(Serialize)]
struct Tool<'a> {
	coverage: &'a Table,
}

/// Serialize `section` as a manifest fragment under `[tool.coverage]`.
pub fn render_document(section: &Table) -> Result<String> {
	let manifest = Manifest {
		tool: Tool { coverage: section },
	};

	toml::to_string(&manifest).map_err(|source| CovcfgError::SerializeError { source })
}

/// Render `section` and write it to `writer` in one piece.
///
/// Nothing is written if rendering fails.
pub fn write_document<W: Write>(writer: &mut W, section: &Table) -> Result<()> {
	let rendered = render_document(section)?;

	writer
		.write_all(rendered.as_bytes())
		.and_then(|()| writer.flush())
		.map_err(|source| CovcfgError::WriteError { source })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{extract_coverage_section, parse_document_str};
	use std::path::Path;

	#[test]
	fn test_render_wraps_under_tool_coverage() {
		let section: Table = toml::from_str(
			r#"
[run]
data_file = "cov-unit"
omit = ["a", "b"]

[html]
directory = "htmlcov-unit"
"#,
		)
		.unwrap();

		let rendered = render_document(&section).unwrap();
		assert!(rendered.contains("[tool.coverage.run]"));
		assert!(rendered.contains("data_file = \"cov-unit\""));
		assert!(rendered.contains("[tool.coverage.html]"));
	}

	#[test]
	fn test_write_document_matches_render() {
		let section: Table = toml::from_str("[html]\ndirectory = \"htmlcov-unit\"\n").unwrap();

		let mut buffer = Vec::new();
		write_document(&mut buffer, &section).unwrap();

		assert_eq!(
			String::from_utf8(buffer).unwrap(),
			render_document(&section).unwrap()
		);
	}

	#[test]
	fn test_write_document_reports_io_error() {
		struct Closed;

		impl Write for Closed {
			fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
				Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
			}

			fn flush(&mut self) -> std::io::Result<()> {
				Ok(())
			}
		}

		let section: Table = toml::from_str("[run]\ndata_file = \"cov\"\n").unwrap();
		assert!(matches!(
			write_document(&mut Closed, &section),
			Err(CovcfgError::WriteError { .. })
		));
	}

	#[test]
	fn test_rendered_document_parses_back() {
		let section: Table =
			toml::from_str("[xml]\noutput = \"out/cov-unit.xml\"\n").unwrap();

		let rendered = render_document(&section).unwrap();
		let document = parse_document_str(&rendered, Path::new("<stdout>")).unwrap();
		assert_eq!(extract_coverage_section(document).unwrap(), section);
	}
}
