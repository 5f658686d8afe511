use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

use covcfg::config::load_coverage_section;
use covcfg::emit::write_document;
use covcfg::merge::{ListStrategy, merge_and_rewrite};

#[derive(Parser)]
#[command(name = "covcfg")]
#[command(
	author,
	version,
	about = "Merge per-suite coverage settings onto a pyproject.toml coverage section"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Project manifest holding the base [tool.coverage] section
	#[arg(value_name = "PYPROJECT")]
	pyproject: PathBuf,

	/// Path to a suite's covcfg.toml override, or a literal suite name
	#[arg(value_name = "COVCFG_OR_NAME")]
	covcfg_or_name: String,

	/// How lists present in both documents are merged
	#[arg(long, value_enum, value_name = "STRATEGY", default_value_t = ListStrategy::Replace)]
	list_strategy: ListStrategy,

	/// Increase log verbosity (-v info, -vv debug)
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};

	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
		.format_timestamp(None)
		.init();
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let section = load_coverage_section(&cli.pyproject)
		.with_context(|| format!("Failed to load {}", cli.pyproject.display()))?;

	let merged = merge_and_rewrite(section, &cli.covcfg_or_name, cli.list_strategy)
		.with_context(|| format!("Failed to apply suite {}", cli.covcfg_or_name))?;

	let mut stdout = std::io::stdout().lock();
	write_document(&mut stdout, &merged).context("Failed to write coverage config to stdout")?;

	Ok(ExitCode::SUCCESS)
}
