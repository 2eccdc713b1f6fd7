use anyhow::{Context, Result};
use clap::Parser;
use intent_config::{load_config, ConfigLoader, IntentConfig};
use intent_service::{
	api,
	cli::{Args, Command},
	service::IntentService,
};
use intent_types::IntentRequest;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	match args.command.clone().unwrap_or(Command::Serve) {
		Command::Serve => {
			let config = load(&args)?;
			setup_tracing(&log_level(&args, Some(&config)), args.json_logs)?;
			serve(config).await
		}
		Command::Resolve { request, pretty } => {
			let config = load(&args)?;
			setup_tracing(&log_level(&args, Some(&config)), args.json_logs)?;
			resolve(config, &request, pretty).await
		}
		Command::Validate { config } => {
			setup_tracing(&log_level(&args, None), args.json_logs)?;
			validate(config.or_else(|| args.config.clone()))
		}
		Command::GenerateConfig { output } => {
			setup_tracing(&log_level(&args, None), args.json_logs)?;
			generate_config(&output)
		}
	}
}

fn load(args: &Args) -> Result<IntentConfig> {
	load_config(args.config.as_deref()).context("Failed to load configuration")
}

/// Command-line level first, then the configured one.
fn log_level(args: &Args, config: Option<&IntentConfig>) -> String {
	args.log_level
		.clone()
		.or_else(|| config.map(|c| c.resolver.log_level.clone()))
		.unwrap_or_else(|| "info".to_string())
}

async fn serve(config: IntentConfig) -> Result<()> {
	info!("Starting intent resolver service");

	let service = Arc::new(IntentService::new(config));
	api::start_http_server(service, shutdown_signal())
		.await
		.context("HTTP server failed")?;

	info!("Intent resolver service stopped");
	Ok(())
}

async fn resolve(config: IntentConfig, request_path: &Path, pretty: bool) -> Result<()> {
	let contents = std::fs::read_to_string(request_path)
		.with_context(|| format!("Failed to read request file: {:?}", request_path))?;
	let request: IntentRequest =
		serde_json::from_str(&contents).context("Failed to parse intent request")?;

	let service = IntentService::new(config);
	let resolution = service
		.resolve(&request)
		.await
		.with_context(|| format!("Failed to resolve {:?}", request_path))?;

	let output = if pretty {
		serde_json::to_string_pretty(&resolution)?
	} else {
		serde_json::to_string(&resolution)?
	};
	println!("{}", output);
	Ok(())
}

fn validate(path: Option<PathBuf>) -> Result<()> {
	let path = path.context("No configuration file given; pass a path or --config")?;
	info!("Validating configuration file: {:?}", path);

	let config = ConfigLoader::from_file(&path).context("Failed to load configuration")?;

	info!("Configuration is valid");
	info!(
		"Client: {} {}",
		config.resolver.client_name, config.resolver.client_version
	);
	info!("Listen address: {}", config.bind_address());
	for token in &config.tokens {
		info!("  Token: {} ({}, {} decimals)", token.symbol, token.asset_id, token.decimals);
	}
	for (pair, snapshot) in &config.market.snapshots {
		info!(
			"  Market: {} volatility={} liquidity={:?}",
			pair, snapshot.volatility, snapshot.liquidity
		);
	}

	Ok(())
}

fn generate_config(output: &Path) -> Result<()> {
	let rendered = ConfigLoader::to_toml(&IntentConfig::default())?;
	std::fs::write(output, rendered)
		.with_context(|| format!("Failed to write configuration to {:?}", output))?;
	info!("Wrote default configuration to {:?}", output);
	Ok(())
}

fn setup_tracing(log_level: &str, json: bool) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	// Logs go to stderr so `resolve` output stays clean on stdout.
	let json_layer = json.then(|| {
		tracing_subscriber::fmt::layer()
			.json()
			.with_writer(std::io::stderr)
	});
	let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(json_layer)
		.with(text_layer)
		.try_init()
		.context("Failed to initialize tracing")?;

	Ok(())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(e) = signal::ctrl_c().await {
			error!("Failed to install Ctrl+C handler: {}", e);
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match signal::unix::signal(signal::unix::SignalKind::terminate()) {
			Ok(mut stream) => {
				stream.recv().await;
			}
			Err(e) => {
				error!("Failed to install signal handler: {}", e);
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}

	info!("Shutdown signal received");
}
