//! Aviary main entry point

use aviary_config::Config;
use aviary_core::Registry;
use aviary_sim::DefaultAccountBackend;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "aviary")]
#[command(author = "Aviary Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight web dashboard for managing a simulated Twitter account fleet", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.print_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let rt = Runtime::new()?;

    rt.block_on(async {
        if !args.config.exists() {
            eprintln!(
                "[WARN] Config file not found: {}, using defaults",
                args.config.display()
            );
        }

        let config = match Config::load_or_default(&args.config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[ERROR] Failed to load configuration: {}", e);
                std::process::exit(1);
            }
        };

        eprintln!(
            "[INFO] Config loaded: listen={}:{}, demo seed={}",
            config.server.host, config.server.port, config.seed.demo_account
        );

        let backend = Arc::new(DefaultAccountBackend);
        let registry = Arc::new(Registry::new(config.clone(), backend));
        eprintln!(
            "[INFO] Registry ready with {} account(s)",
            registry.account_count()
        );

        aviary_api::start_server(config, registry).await;
    });

    Ok(())
}
