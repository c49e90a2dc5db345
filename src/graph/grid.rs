use anyhow::{bail, Result};

/// Largest accepted cell count; keeps row-major indices inside `i32` and node ids inside `u32`.
pub const MAX_CELLS: usize = i32::MAX as usize;

/// Rectangular walkability grid, row-major (`x + y * width`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WalkGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl WalkGrid {
    pub fn new(width: i32, height: i32, cells: Vec<bool>) -> Result<Self> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            bail!(
                "grid {}x{} needs {} cells, got {}",
                width,
                height,
                expected,
                cells.len()
            );
        }
        Ok(Self { width, height, cells })
    }

    /// Build a grid by evaluating `walkable(x, y)` for every cell.
    pub fn from_fn(width: i32, height: i32, mut walkable: impl FnMut(i32, i32) -> bool) -> Result<Self> {
        let mut cells = Vec::with_capacity(cell_count(width, height)?);
        for y in 0..height {
            for x in 0..width {
                cells.push(walkable(x, y));
            }
        }
        Self::new(width, height, cells)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// False for off-grid coordinates.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return false;
        }
        self.cells[x as usize + y as usize * self.width as usize]
    }

    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

fn cell_count(width: i32, height: i32) -> Result<usize> {
    if width < 0 || height < 0 {
        bail!("grid dimensions must be non-negative, got {}x{}", width, height);
    }
    match (width as usize).checked_mul(height as usize) {
        Some(cells) if cells <= MAX_CELLS => Ok(cells),
        _ => bail!(
            "grid {}x{} has more cells than the supported {}",
            width,
            height,
            MAX_CELLS
        ),
    }
}
