use super::super::*;

impl Grid {
    // === Velocity access ===
    #[inline]
    pub fn get_velocity(&self, x: i32, y: i32) -> (f32, f32) {
        if !self.in_bounds(x, y) { return (0.0, 0.0); }
        let cell = self.cells[self.index(x as u32, y as u32)];
        codec::decode_velocity(cell.velocity_x, cell.velocity_y)
    }

    #[inline]
    pub fn set_velocity(&mut self, x: u32, y: u32, vx: f32, vy: f32) {
        let idx = self.index(x, y);
        let (gx, gy) = codec::encode_velocity(vx, vy);
        self.cells[idx].velocity_x = gx;
        self.cells[idx].velocity_y = gy;
    }
}
