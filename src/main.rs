use anyhow::Result;

use movie_discovery::cli::Command;
use movie_discovery::{handle_rank, handle_recommend, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Rank { genre, year, limit } => handle_rank(genre.clone(), *year, *limit),
        Command::Recommend { title, count } => handle_recommend(title, *count),
    }
}
