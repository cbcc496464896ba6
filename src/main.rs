use anyhow::Result;
use clap::Parser;

use ccg::cli::{Cli, Commands, ConfigCommand};
use ccg::commands;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        None => commands::menu::run()?,
        Some(Commands::Init(args)) => commands::init::run(&args)?,
        Some(Commands::DiagnoseMcp) => commands::diagnose::run_diagnose()?,
        Some(Commands::FixMcp) => commands::diagnose::run_fix()?,
        Some(Commands::Config {
            target: ConfigCommand::Mcp(args),
        }) => commands::config_mcp::run(args.token)?,
    }
    Ok(())
}
