//! `sssp run` - distances and paths from one source

use std::time::Instant;

use serde_json::json;
use sssp_core::error::Result;
use sssp_core::graph::{Algorithm, ShortestPaths};
use sssp_core::trace_time;

use crate::cli::{Cli, GraphArgs, OutputFormat};
use crate::commands::helpers::{format_distance_line, format_parents, load_graph};

/// Execute the run command
pub fn execute(
    cli: &Cli,
    graph_args: &GraphArgs,
    algorithms: Vec<Algorithm>,
    start: Instant,
) -> Result<()> {
    let loaded = load_graph(graph_args)?;

    let results: Vec<ShortestPaths> = algorithms
        .into_iter()
        .map(|algorithm| {
            let result = algorithm.run(&loaded.graph, loaded.source);
            trace_time!(start, "run_algorithm", algorithm = algorithm.label());
            result
        })
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let output = json!({
                "source": loaded.source,
                "vertex_count": loaded.graph.vertex_count(),
                "edge_count": loaded.graph.edge_count(),
                "results": results.iter().map(result_to_json).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for (i, result) in results.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_human(result, cli.quiet);
            }
        }
    }

    Ok(())
}

fn print_human(result: &ShortestPaths, quiet: bool) {
    if !quiet {
        println!(
            "{} shortest path parents: {}",
            result.algorithm.short_label(),
            format_parents(result)
        );
    }
    println!("{} Shortest Path:", result.algorithm.label());

    for (vertex, distance) in result.reachable() {
        if let Some(path) = result.path_to(vertex) {
            println!(
                "{}",
                format_distance_line(result.source, vertex, distance, &path)
            );
        }
    }
}

fn result_to_json(result: &ShortestPaths) -> serde_json::Value {
    let paths: Vec<serde_json::Value> = result
        .reachable()
        .filter_map(|(vertex, distance)| {
            result.path_to(vertex).map(|path| {
                json!({
                    "vertex": vertex,
                    "distance": distance,
                    "path": path,
                })
            })
        })
        .collect();

    json!({
        "algorithm": result.algorithm,
        "distance": result.distance,
        "parent": result.parent,
        "relaxations": result.relaxations,
        "paths": paths,
    })
}
