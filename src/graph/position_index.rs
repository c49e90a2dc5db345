//! Bijection between walkable grid cells and dense node ids.
//!
//! Ids are handed out in row-major scan order (y outer, x inner) and can later
//! be relabeled with an externally computed node order via
//! [`PositionIndex::reorder`].

use anyhow::{bail, Result};
use log::debug;

use super::grid::WalkGrid;
use super::models::{NodeId, Position};
use super::permutation;

#[derive(Clone, Debug, Default)]
pub struct PositionIndex {
    width: i32,
    height: i32,
    pos_to_node: Vec<Option<NodeId>>,
    node_to_pos: Vec<Position>,
}

impl PositionIndex {
    pub fn build(grid: &WalkGrid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let cells = grid.cells();
        let mut pos_to_node = Vec::with_capacity(cells.len());
        let mut node_to_pos = Vec::with_capacity(grid.walkable_count());

        for y in 0..height {
            for x in 0..width {
                // WalkGrid caps cells at i32::MAX, so ids fit in u32
                if cells[x as usize + y as usize * width as usize] {
                    pos_to_node.push(Some(NodeId(node_to_pos.len() as u32)));
                    node_to_pos.push(Position::new(x, y));
                } else {
                    pos_to_node.push(None);
                }
            }
        }

        debug!(
            "position_index: built {}x{} grid -> {} nodes",
            width,
            height,
            node_to_pos.len()
        );
        Self { width, height, pos_to_node, node_to_pos }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn node_count(&self) -> usize {
        self.node_to_pos.len()
    }

    /// Panics if `node` is not below [`node_count`](Self::node_count).
    #[inline]
    pub fn position_of(&self, node: NodeId) -> Position {
        self.node_to_pos[node.index()]
    }

    /// `None` for off-grid or blocked cells.
    #[inline]
    pub fn node_at(&self, p: Position) -> Option<NodeId> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        self.pos_to_node[p.x as usize + p.y as usize * self.width as usize]
    }

    #[inline]
    pub fn node_at_xy(&self, x: i32, y: i32) -> Option<NodeId> {
        self.node_at(Position::new(x, y))
    }

    pub fn positions(&self) -> impl Iterator<Item = (NodeId, Position)> + '_ {
        self.node_to_pos
            .iter()
            .enumerate()
            .map(|(i, &p)| (NodeId(i as u32), p))
    }

    /// Relabel nodes so that the node formerly known as `perm[i]` becomes `i`.
    ///
    /// `inv_perm` must be the inverse of `perm` and both must be permutations of
    /// `0..node_count()`; this is only checked in debug builds. Both tables are
    /// rebuilt before either is replaced.
    pub fn reorder(&mut self, perm: &[NodeId], inv_perm: &[NodeId]) {
        debug_assert_eq!(perm.len(), self.node_count(), "reorder: perm length");
        debug_assert_eq!(inv_perm.len(), self.node_count(), "reorder: inv_perm length");
        debug_assert!(
            perm.iter().enumerate().all(|(i, n)| inv_perm[n.index()].index() == i),
            "reorder: inv_perm is not the inverse of perm"
        );

        let pos_to_node: Vec<Option<NodeId>> = self
            .pos_to_node
            .iter()
            .map(|slot| slot.map(|old| inv_perm[old.index()]))
            .collect();
        let node_to_pos: Vec<Position> = perm
            .iter()
            .map(|old| self.node_to_pos[old.index()])
            .collect();

        self.pos_to_node = pos_to_node;
        self.node_to_pos = node_to_pos;
        debug!("position_index: reordered {} nodes", self.node_count());
    }

    /// Validating form of [`reorder`](Self::reorder); leaves the index untouched on error.
    pub fn reorder_by(&mut self, perm: &[NodeId]) -> Result<()> {
        if perm.len() != self.node_count() {
            bail!(
                "permutation has {} entries but index has {} nodes",
                perm.len(),
                self.node_count()
            );
        }
        let inv = permutation::checked_inverse(perm)?;
        self.reorder(perm, &inv);
        Ok(())
    }
}
