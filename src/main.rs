mod config;
mod managers;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use managers::pruning::PruningManager;
use std::path::PathBuf;
use utils::locker::PassLock;

#[derive(Parser)]
#[command(name = "backup-pruner")]
#[command(about = "Prunes old wbadmin backup versions from rotating destinations", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "/etc/backup-pruner/config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one pruning pass over all configured targets (the default)
    Run,

    /// List all configured targets
    List,

    /// Validate the configuration and check the backup tool is reachable
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Scheduler invokes the bare binary, so a missing subcommand means run
    let command = cli.command.unwrap_or(Commands::Run);

    match command {
        Commands::Run => {
            let config = config::load_config(&cli.config)?;

            // Setup logging with file rotation (must keep guard alive)
            let logging_config = managers::logging::LoggingConfig::from_config(
                &config.global.log_directory,
                &config.global.log_level,
                config.global.log_max_files,
            );
            let _log_guard = managers::logging::init_logging(&logging_config)?;

            // Fail fast if a previous pass is still running
            let _lock = PassLock::acquire()?;

            let manager = PruningManager::new(config);
            manager.run_pass()?;
        }

        Commands::List => {
            managers::logging::init_console_logging();
            let config = config::load_config(&cli.config)?;

            println!(
                "Retention: keep {} versions per target",
                config.global.keep_versions
            );
            println!("Tool: {}", config.global.tool_path.display());
            println!();

            if config.targets.is_empty() {
                println!("No targets configured.");
            }
            for target in &config.targets {
                println!("{:<10} {:<10} {}", target.label, target.day, target.volume);
            }
        }

        Commands::Validate => {
            managers::logging::init_console_logging();
            let config = config::load_config(&cli.config)?;

            let tool_path = &config.global.tool_path;
            let reachable = if tool_path.components().count() > 1 {
                tool_path.is_file()
            } else {
                which::which(tool_path).is_ok()
            };

            if !reachable {
                eprintln!("✗ Backup tool not found: {}", tool_path.display());
                std::process::exit(1);
            }

            println!(
                "✓ Configuration valid: {} target(s), keep {} versions",
                config.targets.len(),
                config.global.keep_versions
            );
        }
    }

    Ok(())
}
