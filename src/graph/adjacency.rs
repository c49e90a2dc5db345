//! Weighted 8-directional arc extraction with the corner-cutting rule.

use log::info;
use rayon::prelude::*;
use std::ops::Range;

use super::config::Config;
use super::models::{NodeId, Position, WeightedArc};
use super::neighbor_policy::MovementPolicy;
use super::position_index::PositionIndex;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExtractStats {
    pub nodes_processed: usize,
    pub arcs_emitted: usize,
    pub corner_cuts_rejected: usize,
}

impl ExtractStats {
    fn merge(&mut self, other: &ExtractStats) {
        self.nodes_processed += other.nodes_processed;
        self.arcs_emitted += other.arcs_emitted;
        self.corner_cuts_rejected += other.corner_cuts_rejected;
    }
}

/// Arcs for the default policy: 8 directions, no corner cutting.
///
/// Arcs come out ordered by source node, then by neighbor table order. Every
/// undirected edge appears once per endpoint.
pub fn extract_graph(index: &PositionIndex) -> Vec<WeightedArc> {
    extract_graph_with(index, &MovementPolicy::default()).0
}

pub fn extract_graph_with(index: &PositionIndex, policy: &MovementPolicy) -> (Vec<WeightedArc>, ExtractStats) {
    let mut arcs = Vec::with_capacity(index.node_count() * policy.neighbor_steps().len());
    let stats = extract_range(index, policy, 0..index.node_count() as u32, &mut arcs);
    (arcs, stats)
}

/// Same output, in the same order, as [`extract_graph_with`]; nodes are split
/// into contiguous ranges of `chunk_size` and processed on the rayon pool.
pub fn par_extract_graph_with(
    index: &PositionIndex,
    policy: &MovementPolicy,
    chunk_size: usize,
) -> (Vec<WeightedArc>, ExtractStats) {
    let n = index.node_count() as u32;
    let chunk = chunk_size.max(1) as u32;
    let ranges: Vec<Range<u32>> = (0..n)
        .step_by(chunk as usize)
        .map(|lo| lo..lo.saturating_add(chunk).min(n))
        .collect();

    let parts: Vec<(Vec<WeightedArc>, ExtractStats)> = ranges
        .par_iter()
        .map(|r| {
            let mut arcs = Vec::with_capacity(r.len() * policy.neighbor_steps().len());
            let stats = extract_range(index, policy, r.clone(), &mut arcs);
            (arcs, stats)
        })
        .collect();

    let total = parts.iter().map(|(a, _)| a.len()).sum();
    let mut arcs = Vec::with_capacity(total);
    let mut stats = ExtractStats::default();
    for (part, s) in parts {
        arcs.extend(part);
        stats.merge(&s);
    }
    (arcs, stats)
}

/// Extract using the policy and execution mode from `cfg`.
pub fn extract(index: &PositionIndex, cfg: &Config) -> (Vec<WeightedArc>, ExtractStats) {
    let policy = cfg.policy();
    let (arcs, stats) = if cfg.parallel {
        par_extract_graph_with(index, &policy, cfg.chunk_size)
    } else {
        extract_graph_with(index, &policy)
    };
    info!(
        "adjacency: extracted (parallel={}) -> nodes={} arcs={} corner_cuts_rejected={}",
        cfg.parallel,
        stats.nodes_processed,
        stats.arcs_emitted,
        stats.corner_cuts_rejected
    );
    (arcs, stats)
}

fn extract_range(
    index: &PositionIndex,
    policy: &MovementPolicy,
    nodes: Range<u32>,
    out: &mut Vec<WeightedArc>,
) -> ExtractStats {
    let steps = policy.neighbor_steps();
    let mut stats = ExtractStats::default();
    for u in nodes.map(NodeId) {
        let p = index.position_of(u);
        stats.nodes_processed += 1;
        for step in steps {
            let q = p.offset(step.offset);
            let Some(v) = index.node_at(q) else { continue };
            if step.is_diagonal() && !policy.allow_corner_cut && !corners_open(index, p, q) {
                stats.corner_cuts_rejected += 1;
                continue;
            }
            out.push(WeightedArc::new(u, v, step.weight));
            stats.arcs_emitted += 1;
        }
    }
    stats
}

// Both cells flanking the move p -> q must be walkable.
fn corners_open(index: &PositionIndex, p: Position, q: Position) -> bool {
    index.node_at_xy(p.x, q.y).is_some() && index.node_at_xy(q.x, p.y).is_some()
}
