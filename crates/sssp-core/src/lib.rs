//! sssp Core Library
//!
//! Single-source shortest paths over a fixed-size weighted directed graph.
//! Three relaxation strategies share one adjacency-list [`graph::Graph`] and
//! one result shape ([`graph::ShortestPaths`]); the caller picks the strategy
//! that matches what it knows about the graph.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
