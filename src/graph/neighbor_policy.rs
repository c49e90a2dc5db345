use super::models::Offset;

/// Cost of an axis-aligned step (one cell, scaled by 1000).
pub const ORTHOGONAL_WEIGHT: u32 = 1000;
/// Cost of a diagonal step: round(1000 * sqrt(2)).
pub const DIAGONAL_WEIGHT: u32 = 1414;

#[derive(Copy, Clone, Debug)]
pub struct MovementPolicy {
    pub allow_diagonals: bool,
    pub allow_corner_cut: bool,
}

impl Default for MovementPolicy {
    fn default() -> Self {
        Self { allow_diagonals: true, allow_corner_cut: false }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Step {
    pub offset: Offset,
    pub weight: u32,
}

impl Step {
    const fn new(dx: i32, dy: i32, weight: u32) -> Self {
        Self { offset: Offset(dx, dy), weight }
    }

    pub fn is_diagonal(&self) -> bool {
        self.offset.0 != 0 && self.offset.1 != 0
    }
}

impl MovementPolicy {
    /// Steps in scan order: row above, same row, row below; left to right.
    pub fn neighbor_steps(&self) -> &'static [Step] {
        const CARD: [Step; 4] = [
            Step::new(0, -1, ORTHOGONAL_WEIGHT),
            Step::new(-1, 0, ORTHOGONAL_WEIGHT),
            Step::new(1, 0, ORTHOGONAL_WEIGHT),
            Step::new(0, 1, ORTHOGONAL_WEIGHT),
        ];
        const ALL: [Step; 8] = [
            Step::new(-1, -1, DIAGONAL_WEIGHT),
            Step::new(0, -1, ORTHOGONAL_WEIGHT),
            Step::new(1, -1, DIAGONAL_WEIGHT),
            Step::new(-1, 0, ORTHOGONAL_WEIGHT),
            Step::new(1, 0, ORTHOGONAL_WEIGHT),
            Step::new(-1, 1, DIAGONAL_WEIGHT),
            Step::new(0, 1, ORTHOGONAL_WEIGHT),
            Step::new(1, 1, DIAGONAL_WEIGHT),
        ];
        if self.allow_diagonals { &ALL } else { &CARD }
    }
}
