//! `sssp example` - print the built-in graph as a definition file

use sssp_core::config::GraphConfig;
use sssp_core::error::Result;

use crate::cli::{Cli, OutputFormat};

/// Execute the example command
pub fn execute(cli: &Cli) -> Result<()> {
    let example = GraphConfig::example();

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&example)?),
        OutputFormat::Human => print!("{}", example.to_toml()?),
    }

    Ok(())
}
