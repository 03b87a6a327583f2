//! CLI entry point for the Letter Boxed solver.
//!
//! Usage:
//!   letter-boxed solve [LETTERS] [options]
//!
//! LETTERS are the twelve puzzle letters, three per side in order. When
//! omitted, the first line of stdin is used.
//!
//! Options:
//!   --dictionary <file>   Word list, one word per line (default: scrabble_dictionary.txt)
//!   --max-words <n>       Longest chain to search, 2 or 3 (default: 3)
//!   --shortest-only       Only report the shortest solutions
//!   --json                Print the report as JSON
//!   --verbose             Log progress to stderr

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use letter_boxed::{run, Result, SearchConfig};

#[derive(Parser)]
#[command(name = "letter-boxed")]
#[command(about = "Exhaustive two- and three-word solver for Letter Boxed puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every two- and three-word chain that uses all twelve letters
    Solve {
        /// The twelve puzzle letters, sides in order (reads stdin if omitted)
        #[arg(value_name = "LETTERS")]
        letters: Option<String>,

        /// Dictionary file, one word per line
        #[arg(long, default_value = "scrabble_dictionary.txt")]
        dictionary: PathBuf,

        /// Longest chain to search
        #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(2..=3))]
        max_words: u8,

        /// Only report the shortest solution of each length
        #[arg(long)]
        shortest_only: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Log progress to stderr
        #[arg(long)]
        verbose: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "letter_boxed=info"
    } else {
        "letter_boxed=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_puzzle_line(letters: Option<String>) -> Result<String> {
    match letters {
        Some(letters) => Ok(letters),
        None => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            letters,
            dictionary,
            max_words,
            shortest_only,
            json,
            verbose,
        } => {
            init_tracing(verbose);

            let config = SearchConfig {
                max_words: max_words as usize,
                collect_solutions: !shortest_only,
            };
            let report = match read_puzzle_line(letters)
                .and_then(|line| run(&line, &dictionary, &config))
            {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Error serializing report: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{}", report);
            }
        }
    }
}
