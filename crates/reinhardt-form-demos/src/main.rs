//! Reinhardt Form Demos
//!
//! Command-line runner for the field adapter demo pages. Each subcommand
//! builds one page, prints the rendered HTML, scripts a few user
//! interactions and reports the submit outcome.
//!
//! ## Usage
//!
//! ```bash
//! form-demos text-field
//! form-demos -vv signup
//! form-demos --config form.toml radio-group
//! ```

mod pages;

use std::path::PathBuf;
use std::process;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use colored::Colorize;
use reinhardt_form_state::FormConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[derive(Parser)]
#[command(name = "form-demos")]
#[command(about = "Run the Reinhardt field adapter demo pages", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,

	/// TOML file with the form configuration (validation modes etc.)
	#[arg(long, value_name = "PATH", global = true)]
	config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
	/// Store name text field
	TextField,
	/// Basic checkbox
	Checkbox,
	/// Dropdown with two options
	Select,
	/// Customer account radio group
	RadioGroup,
	/// Choice list bound to a single value
	SingleChoiceList,
	/// Every adapter on one page, submitted asynchronously
	Signup,
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);

	if let Err(e) = run(&cli) {
		eprintln!("{} {:#}", "Error:".red().bold(), e);
		process::exit(1);
	}
}

fn run(cli: &Cli) -> anyhow::Result<()> {
	let config = load_config(cli.config.as_deref())?;
	tracing::debug!(?config, command = ?cli.command, "running demo page");

	match cli.command {
		Commands::TextField => pages::text_field::run(&config),
		Commands::Checkbox => pages::checkbox::run(&config),
		Commands::Select => pages::select::run(&config),
		Commands::RadioGroup => pages::radio_group::run(&config),
		Commands::SingleChoiceList => pages::single_choice_list::run(&config),
		Commands::Signup => pages::signup::run(&config),
	}
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<FormConfig> {
	match path {
		Some(path) => FormConfig::from_file(path)
			.with_context(|| format!("failed to load form config from {}", path.display())),
		None => Ok(FormConfig::default()),
	}
}

fn init_tracing(verbosity: u8) {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();
}
