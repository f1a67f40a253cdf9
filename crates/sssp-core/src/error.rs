//! Error types and exit codes for sssp
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, decoding)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (graph definition or vertex ids do not fit)
//!
//! The shortest-path algorithms themselves never return these errors. They
//! assume a well-formed graph and abort on out-of-range vertex ids; the
//! checked paths in [`crate::config`] and [`crate::graph::Graph::try_from_edges`]
//! are where bad input is turned into an `SsspError`.

mod macros;

use thiserror::Error;

use crate::graph::VertexId;

/// Exit codes per sssp CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph or vertex id (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading graphs or driving the algorithms
#[derive(Error, Debug)]
pub enum SsspError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, bellman-ford, or dag)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("vertex {target} is not reachable from {from}")]
    Unreachable { from: VertexId, target: VertexId },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl SsspError {
    /// Create an error for an unusable graph definition
    pub fn invalid_graph(reason: impl std::fmt::Display) -> Self {
        SsspError::InvalidGraph {
            reason: reason.to_string(),
        }
    }

    /// Check a vertex id against the vertex count
    pub fn check_vertex(vertex: VertexId, vertex_count: usize) -> Result<()> {
        if vertex < vertex_count {
            Ok(())
        } else {
            Err(SsspError::VertexOutOfRange {
                vertex,
                vertex_count,
            })
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SsspError::UnknownFormat(_)
            | SsspError::UnknownAlgorithm(_)
            | SsspError::UsageError(_) => ExitCode::Usage,

            SsspError::VertexOutOfRange { .. }
            | SsspError::InvalidGraph { .. }
            | SsspError::Unreachable { .. } => ExitCode::Data,

            SsspError::Io(_)
            | SsspError::Json(_)
            | SsspError::Toml(_)
            | SsspError::TomlSer(_)
            | SsspError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type name for JSON output
    pub fn error_type(&self) -> &'static str {
        match self {
            SsspError::UnknownFormat(_) => "unknown_format",
            SsspError::UnknownAlgorithm(_) => "unknown_algorithm",
            SsspError::UsageError(_) => "usage_error",
            SsspError::VertexOutOfRange { .. } => "vertex_out_of_range",
            SsspError::InvalidGraph { .. } => "invalid_graph",
            SsspError::Unreachable { .. } => "unreachable",
            SsspError::Io(_) => "io_error",
            SsspError::Json(_) => "json_error",
            SsspError::Toml(_) | SsspError::TomlSer(_) => "toml_error",
            SsspError::Other(_) => "other",
        }
    }

    /// Format error as JSON for structured output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for sssp operations
pub type Result<T> = std::result::Result<T, SsspError>;
