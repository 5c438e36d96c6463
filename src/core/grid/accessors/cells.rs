use super::super::*;
use super::CellState;

impl Grid {
    // === Packed cell access ===
    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> Cell {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set_cell(&mut self, x: u32, y: u32, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Decoded cell; out-of-bounds reads return the zero state
    #[inline]
    pub fn state(&self, x: i32, y: i32) -> CellState {
        if !self.in_bounds(x, y) { return CellState::default(); }
        self.cells[self.index(x as u32, y as u32)].decode()
    }

    /// Decoded cell with clamp-to-edge addressing
    #[inline]
    pub fn sample_clamped(&self, x: i64, y: i64) -> CellState {
        self.cells[self.clamped_index(x, y)].decode()
    }

    #[inline]
    pub fn row(&self, y: u32) -> &[Cell] {
        let start = self.index(0, y);
        &self.cells[start..start + self.width as usize]
    }
}
