use super::super::*;

impl Grid {
    // === Density access ===
    #[inline]
    pub fn get_density(&self, x: i32, y: i32) -> f32 {
        if !self.in_bounds(x, y) { return 0.0; }
        codec::decode_unit(self.cells[self.index(x as u32, y as u32)].density)
    }

    #[inline]
    pub fn set_density(&mut self, x: u32, y: u32, d: f32) {
        let idx = self.index(x, y);
        self.cells[idx].density = codec::encode_unit(d);
    }

    /// Sum of decoded density over the whole grid
    pub fn total_density(&self) -> f32 {
        self.cells.iter().map(|c| codec::decode_unit(c.density)).sum()
    }
}
