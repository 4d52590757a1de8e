//! CLI entry point for the `calgo` command-line tool.

use std::io::{self, Write};
use std::process;

use clap::{Parser, Subcommand};

use classic_algorithms::cli::commands::{self, HashStrategy};
use classic_algorithms::matrix::{LoopOrder, SliceDirection};
use classic_algorithms::AlgoError;

#[derive(Parser)]
#[command(
    name = "calgo",
    about = "Classic algorithm programs reading integers from stdin"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// BFS over a graph given as V, then per node `k n1 .. nk`
    BfsList,
    /// BFS over a graph given as V, then a V x V adjacency matrix
    BfsMatrix,
    /// Convert a V x V adjacency matrix to adjacency-list input
    Convert,
    /// Insert N values, then answer S presence queries
    Hash {
        /// Collision strategy: chaining or linear
        #[arg(long, default_value = "chaining")]
        strategy: String,
    },
    /// Multiply two N x N matrices
    Multiply {
        /// Loop order: ijk, kij or jki
        #[arg(long, default_value = "ijk")]
        order: String,
    },
    /// Print every row or column slice of the demo matrix
    Slice {
        /// Direction: column (default) or row
        #[arg(long, default_value = "column")]
        direction: String,
    },
    /// Sort the sequence n, n-1, .., 1
    Sort,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let stdin = io::stdin().lock();
    let mut stdout = io::BufWriter::new(io::stdout().lock());

    let result = match cli.command {
        Commands::BfsList => commands::cmd_bfs_list(stdin, &mut stdout, json),
        Commands::BfsMatrix => commands::cmd_bfs_matrix(stdin, &mut stdout, json),
        Commands::Convert => commands::cmd_convert(stdin, &mut stdout, json),
        Commands::Hash { strategy } => {
            let strategy = match HashStrategy::from_name(&strategy) {
                Some(s) => s,
                None => {
                    eprintln!("Invalid hash strategy: {}", strategy);
                    process::exit(3);
                }
            };
            commands::cmd_hash(stdin, &mut stdout, strategy, json)
        }
        Commands::Multiply { order } => match order.parse::<LoopOrder>() {
            Ok(order) => commands::cmd_multiply(stdin, &mut stdout, order, json),
            Err(e) => Err(e),
        },
        Commands::Slice { direction } => {
            let direction = match direction.as_str() {
                "row" => SliceDirection::Row,
                "column" => SliceDirection::Column,
                other => {
                    eprintln!("Invalid slice direction: {}", other);
                    process::exit(3);
                }
            };
            commands::cmd_slice(stdin, &mut stdout, direction, json)
        }
        Commands::Sort => commands::cmd_sort(stdin, &mut stdout, json),
    };

    let result = result.and_then(|()| stdout.flush().map_err(AlgoError::from));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            AlgoError::Io(_) => 1,
            AlgoError::InvalidInput(_)
            | AlgoError::NodeOutOfRange { .. }
            | AlgoError::DimensionMismatch { .. } => 3,
            _ => 5,
        };
        process::exit(code);
    }
}
