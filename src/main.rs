//! deploy-config CLI
//!
//! Resolves the contract deployment configuration from the environment and
//! prints it for the compiler and deployment tooling.
//!
//! # Overview
//!
//! ```text
//!   process env ──┐
//!                 ├─▶ EnvSource ─▶ assemble ─▶ ResolvedConfig ─┬─▶ show     (json / toml / hardhat)
//!   .env file ────┘                                            ├─▶ networks (name, chain, url)
//!                                                              └─▶ check    (validation + deployers)
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use deploy_config::blockchain::Deployer;
use deploy_config::config::loader::{process_environment, DEFAULT_ENV_FILE};
use deploy_config::config::render::{render, OutputFormat};
use deploy_config::config::{assemble, validate_config, ResolvedConfig};
use deploy_config::observability::init_logging;

#[derive(Parser)]
#[command(name = "deploy-config")]
#[command(about = "Resolve compiler and network settings for contract deployment", long_about = None)]
struct Cli {
    /// Env file layered under the process environment.
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Ignore the env file and read only the process environment.
    #[arg(long)]
    no_env_file: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration
    Show {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Print private keys and API keys instead of masking them
        #[arg(long)]
        reveal_secrets: bool,
    },
    /// List configured networks
    Networks,
    /// Validate the configuration and derive deployer addresses
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let env_file = (!cli.no_env_file).then_some(cli.env_file.as_path());
    let env = process_environment(env_file)?;
    // `check` reports every validation error itself.
    let config = if matches!(cli.command, Commands::Check) {
        assemble(&env)
    } else {
        ResolvedConfig::checked(&env)?
    };

    tracing::info!(
        networks = config.networks.len(),
        signing = config.signing_networks().count(),
        compiler = %config.compiler.version,
        "Configuration resolved"
    );

    match cli.command {
        Commands::Show {
            format,
            reveal_secrets,
        } => {
            let output = if reveal_secrets {
                render(&config, format)?
            } else {
                render(&config.redacted(), format)?
            };
            println!("{}", output);
        }
        Commands::Networks => {
            for entry in config.networks.values() {
                println!(
                    "{:<10} {:>10}  {:<50} {}",
                    entry.name,
                    entry.chain_id,
                    entry.url.as_deref().unwrap_or("(in-process)"),
                    if entry.can_sign() { "signer" } else { "-" }
                );
            }
        }
        Commands::Check => check(&config)?,
    }

    Ok(())
}

fn check(config: &ResolvedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut failed = false;

    match validate_config(config) {
        Ok(()) => println!("config: ok"),
        Err(errors) => {
            failed = true;
            for error in &errors {
                println!("config: {}", error);
            }
        }
    }

    for entry in config.signing_networks() {
        for account in &entry.accounts {
            match Deployer::from_private_key(account, entry.chain_id) {
                Ok(deployer) => println!("{}: deployer {}", entry.name, deployer.address),
                Err(e) => {
                    failed = true;
                    println!("{}: {}", entry.name, e);
                }
            }
        }
    }

    if failed {
        return Err("configuration check failed".into());
    }
    Ok(())
}
