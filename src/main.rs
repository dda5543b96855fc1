use clap::Parser;
use ftx_rest::cli::{Cli, Commands};
use ftx_rest::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    ftx_rest::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Endpoints(args) => {
            args.execute()?;
        }
        Commands::Call(args) => {
            tracing::debug!(base_url = %config.client.base_url, "Using API");
            args.execute(&config.client).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Base URL: {}", config.client.base_url);
            println!("  Timeout: {}s", config.client.timeout_secs);
            println!("  Header prefix: {}", config.client.header_prefix);
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
            match config.telemetry.metrics_port {
                Some(port) => println!("  Metrics: 0.0.0.0:{}", port),
                None => println!("  Metrics: disabled"),
            }
        }
    }

    Ok(())
}
