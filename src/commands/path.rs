//! `sssp path` - a single source-to-target path

use std::time::Instant;

use serde_json::json;
use sssp_core::error::{Result, SsspError};
use sssp_core::graph::{Algorithm, VertexId};
use sssp_core::trace_time;

use crate::cli::{Cli, GraphArgs, OutputFormat};
use crate::commands::helpers::{format_distance_line, load_graph};

/// Execute the path command
pub fn execute(
    cli: &Cli,
    graph_args: &GraphArgs,
    target: VertexId,
    algorithm: Algorithm,
    start: Instant,
) -> Result<()> {
    let loaded = load_graph(graph_args)?;
    SsspError::check_vertex(target, loaded.graph.vertex_count())?;

    let result = algorithm.run(&loaded.graph, loaded.source);
    trace_time!(start, "run_algorithm", algorithm = algorithm.label());

    let (Some(distance), Some(path)) = (result.distance(target), result.path_to(target)) else {
        return Err(SsspError::Unreachable {
            from: loaded.source,
            target,
        });
    };

    match cli.format {
        OutputFormat::Json => {
            let output = json!({
                "algorithm": algorithm,
                "source": loaded.source,
                "target": target,
                "distance": distance,
                "path": path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!(
                "{}",
                format_distance_line(loaded.source, target, distance, &path)
            );
        }
    }

    Ok(())
}
