// argdemo - Command-line parsing showcase
use anyhow::Context;
use argdemo::cli::{execute_command, Args};
use argdemo::infrastructure::config::ConfigManager;
use argdemo::infrastructure::logging::init_logging;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args = Args::parse_resolved();

    let config_manager = ConfigManager::new();
    let config = match &args.config {
        Some(path) => config_manager.load_config_from_path(Path::new(path))?,
        None => config_manager.load_config()?,
    };

    if !args.quiet {
        init_logging(&config.log_level, args.verbose)?;
    }

    execute_command(&args, &config).context("failed to print parsed arguments")?;
    Ok(())
}
