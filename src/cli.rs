//! CLI argument parsing for sssp
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub use sssp_core::format::OutputFormat;
use sssp_core::graph::{Algorithm, VertexId};

/// sssp - single-source shortest paths over small weighted digraphs
#[derive(Parser, Debug)]
#[command(name = "sssp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "sssp_core=debug")
    #[arg(long, global = true, env = "SSSP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute shortest paths from a source with one or all algorithms
    Run {
        #[command(flatten)]
        graph: GraphArgs,

        /// Algorithm to run; `all` runs bfs, bellman-ford and dag in turn
        #[arg(long, short, value_enum, default_value = "all")]
        algorithm: AlgorithmChoice,
    },

    /// Print the shortest path from the source to a single target
    Path {
        #[command(flatten)]
        graph: GraphArgs,

        /// Destination vertex
        #[arg(long, short)]
        target: VertexId,

        /// Algorithm to run (bfs, bellman-ford, or dag)
        #[arg(long, short, default_value = "bellman-ford")]
        algorithm: Algorithm,
    },

    /// Print the built-in example graph as a graph definition file
    Example,
}

/// Where the graph comes from and which vertex to start at
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Graph definition file (.toml or .json); defaults to the built-in example
    #[arg(long, short)]
    pub graph: Option<PathBuf>,

    /// Source vertex; overrides the file's `source`
    #[arg(long, short)]
    pub source: Option<VertexId>,
}

/// Algorithm selection for `run`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    All,
    Bfs,
    BellmanFord,
    Dag,
}

impl AlgorithmChoice {
    /// Algorithms to run, in report order
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::All => Algorithm::ALL.to_vec(),
            AlgorithmChoice::Bfs => vec![Algorithm::Breadth],
            AlgorithmChoice::BellmanFord => vec![Algorithm::BellmanFord],
            AlgorithmChoice::Dag => vec![Algorithm::Dag],
        }
    }
}
