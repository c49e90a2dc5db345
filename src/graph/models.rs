use serde::{Deserialize, Serialize};

/// Dense identifier of a walkable cell, in `[0, node_count)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, o: Offset) -> Self {
        Self { x: self.x + o.0, y: self.y + o.1 }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Offset(pub i32, pub i32);

/// Directed arc; `weight` is a distance scaled by 1000.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct WeightedArc {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: u32,
}

impl WeightedArc {
    pub const fn new(source: NodeId, target: NodeId, weight: u32) -> Self {
        Self { source, target, weight }
    }
}
