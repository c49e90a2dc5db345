//! Walkability grid to weighted graph conversion for shortest-path preprocessing.

pub mod config;
pub mod logging;
pub mod models;
pub mod grid;
pub mod permutation;
pub mod position_index;
pub mod neighbor_policy;
pub mod adjacency;

pub use adjacency::{extract, extract_graph, extract_graph_with, par_extract_graph_with, ExtractStats};
pub use grid::WalkGrid;
pub use models::{NodeId, Offset, Position, WeightedArc};
pub use neighbor_policy::{MovementPolicy, DIAGONAL_WEIGHT, ORTHOGONAL_WEIGHT};
pub use position_index::PositionIndex;

/// Init logging and, when `cfg.threads` is set, the global rayon pool.
pub fn init(cfg: &config::Config) {
    logging::init(cfg.log_level.as_deref());
    if let Some(n) = cfg.threads {
        let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
    }
}
