//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "intent-resolver")]
#[command(about = "Resolve high-level DeFi intents into executable parameters", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	/// Path to configuration file
	#[arg(short, long, env = "CONFIG_FILE", global = true)]
	pub config: Option<PathBuf>,

	/// Log level override (trace, debug, info, warn, error)
	#[arg(short, long, env = "LOG_LEVEL", global = true)]
	pub log_level: Option<String>,

	/// Emit logs as JSON lines
	#[arg(long, global = true)]
	pub json_logs: bool,

	/// Subcommand to execute, defaults to `serve`
	#[command(subcommand)]
	pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
	/// Run the HTTP API
	#[command(about = "Serve the intent resolution HTTP API")]
	Serve,

	/// Resolve a single request file
	#[command(about = "Resolve an intent request from a JSON file and print the result")]
	Resolve {
		/// Request file (JSON)
		#[arg(short, long)]
		request: PathBuf,

		/// Pretty-print the output
		#[arg(long)]
		pretty: bool,
	},

	/// Validate configuration file
	#[command(about = "Validate a resolver configuration file")]
	Validate {
		/// Configuration file to validate, defaults to --config
		config: Option<PathBuf>,
	},

	/// Generate example configuration
	#[command(about = "Write the default configuration to a file")]
	GenerateConfig {
		/// Output file path
		#[arg(short, long, default_value = "config.toml")]
		output: PathBuf,
	},
}
