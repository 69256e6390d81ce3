mod cli;
mod error;
mod render;
mod route;
mod serve;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use cli::Commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => render::render(args),
        Commands::Serve(args) => serve::serve(args).map_err(error::CliError::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
