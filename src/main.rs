use clap::Parser;
use stkprune::cli::{self, Cli, Commands};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Prune(args) => cli::prune::execute(args),
        Commands::List(args) => cli::list::execute(args),
        Commands::Check(command) => cli::check::execute(command),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
