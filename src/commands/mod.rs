//! CLI commands for sssp

pub mod dispatch;
pub mod example;
pub mod helpers;
pub mod path;
pub mod run;
