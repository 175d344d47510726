use anyhow::Result;
use clap::Parser;

mod cli_bin;

use cli_bin::args::{Cli, Commands};
use cli_bin::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Build => commands::build(&cli.config),
        Commands::Watch => commands::watch(&cli.config),
        Commands::Check => commands::check(&cli.config),
        Commands::Posts => commands::posts(&cli.config),
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
