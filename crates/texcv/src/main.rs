mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::GlobalArgs;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let globals = GlobalArgs {
        project: cli.project,
        config: cli.config,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Commands::Build {
            languages,
            output,
            keep_intermediates,
        } => commands::build::run(&globals, languages, output, keep_intermediates),
        Commands::Render {
            language,
            output,
            stdout,
        } => commands::render::run(&globals, language, output, stdout),
        Commands::Doctor { json } => commands::doctor::run(&globals, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `warn` by default, `debug` with --verbose; RUST_LOG takes precedence
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
