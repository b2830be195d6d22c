//! Warden server binary
//!
//! Starts the chat webhook server and the claim expiry sweeper.

use std::env;
use std::process;
use warden_server::{config::ServerConfig, start_server, ServerError};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServerConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using default test configuration");
        eprintln!("Usage: warden-server --config <path-to-config.toml>");
        eprintln!();
        ServerConfig::default_test_config()
    };

    start_server(config).await
}

fn print_help() {
    println!("Warden Server - POI claim arbitration over game chat");
    println!();
    println!("USAGE:");
    println!("    warden-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address / bind_port: where the webhook listens");
    println!("    - outbound_url: game-server chat endpoint (optional, log-only if absent)");
    println!("    - max_concurrent_requests: webhook calls handled at once (default: 32)");
    println!("    - [resolver] threshold: fuzzy match acceptance score (default: 0.6)");
    println!("    - [sweeper] sweep_interval_secs / claim_ttl_minutes (default: 60 / 60)");
    println!("    - [[pois]]: id, aliases (first is the display name), excluded");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG           Log filter (default: info)");
    println!();
}
