//! Configuration validation utility
//!
//! Usage: cargo run --bin validate-config config/intent-resolver.toml

use std::env;
use std::process;

use intent_config::ConfigLoader;

fn main() {
	let args: Vec<String> = env::args().collect();

	if args.len() != 2 {
		eprintln!("Usage: {} <config-file>", args[0]);
		process::exit(1);
	}

	let config_path = &args[1];

	println!("Validating configuration file: {}", config_path);

	match ConfigLoader::from_file(config_path) {
		Ok(config) => {
			let symbols: Vec<&str> = config.tokens.iter().map(|t| t.symbol.as_str()).collect();
			println!("✅ Configuration is valid!");
			println!(
				"Client: {} {}",
				config.resolver.client_name, config.resolver.client_version
			);
			println!("Listen address: {}", config.bind_address());
			println!("Tokens configured: {}", symbols.join(", "));
			println!("Market snapshots: {}", config.market.snapshots.len());
			println!(
				"Slippage bounds: {}-{} bps",
				config.policy.bounds.min_slippage_bps, config.policy.bounds.max_slippage_bps
			);
			println!(
				"Deadline bounds: {}-{} minutes",
				config.policy.bounds.min_deadline_minutes, config.policy.bounds.max_deadline_minutes
			);
		}
		Err(e) => {
			eprintln!("❌ Configuration validation failed:");
			eprintln!("{:#}", e);
			process::exit(1);
		}
	}
}
