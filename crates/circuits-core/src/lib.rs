#![deny(clippy::print_stdout, clippy::print_stderr)]

//! Enumeration of every elementary cycle in a directed graph.
//!
//! The entry point is [`enumerate_cycles`], which takes a label per vertex
//! and a square boolean adjacency matrix. Lower-level access is available
//! through [`AdjacencyList`], [`RestrictedSccFinder`] and [`CycleSearch`].

pub mod adjacency;
pub mod error;
pub mod scc;
pub mod search;

pub use adjacency::AdjacencyList;
pub use error::CycleError;
pub use scc::{RestrictedSccFinder, SccResult};
pub use search::{
    CycleSearch, SearchOutput, SearchSummary, enumerate_cycle_indices, enumerate_cycles,
};

/// Returns the current version of the circuits-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
