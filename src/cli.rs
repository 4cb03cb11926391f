use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "movie discovery backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print the most popular movies by weighted score
    Rank {
        /// Only movies whose genre list contains this label
        #[arg(short, long)]
        genre: Option<String>,
        /// Only movies released in this year
        #[arg(short, long)]
        year: Option<i32>,
        /// How many movies to show (defaults to 10)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Recommend movies with similar genres to the given title
    Recommend {
        /// Exact title to look up
        title: String,
        /// How many recommendations to show (defaults to 5)
        #[arg(short, long)]
        count: Option<usize>,
    },
}
