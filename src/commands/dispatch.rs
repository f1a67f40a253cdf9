//! Command dispatch logic for sssp
use std::time::Instant;

use sssp_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        Commands::Run { graph, algorithm } => {
            commands::run::execute(cli, graph, algorithm.algorithms(), start)
        }

        Commands::Path {
            graph,
            target,
            algorithm,
        } => commands::path::execute(cli, graph, *target, *algorithm, start),

        Commands::Example => commands::example::execute(cli),
    }
}
