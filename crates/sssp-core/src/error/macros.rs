//! Error macros for sssp

/// Macro for creating invalid graph errors
#[macro_export]
macro_rules! bail_invalid {
    ($reason:expr) => {
        return Err($crate::error::SsspError::invalid_graph($reason))
    };
}
