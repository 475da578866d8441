use std::process::ExitCode;

use clap::Parser;

use graphql_translator_cli::{run, Command};

/// Translate GraphQL documents into QL queries.
#[derive(Debug, Parser)]
#[command(name = "graphql-translate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
pub async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
