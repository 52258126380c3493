use crate::table::Cells;

/// Subtracted from the raw intensity before quantizing, pulls the rim of the ball down to 0.
pub const FLOOR_OFFSET: f64 = 9.0;

/// Radial falloff over a `dim`×`dim` sprite, brightest at the center.
///
/// Only the top-left quadrant is ever generated, the other three follow by symmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub dim: u32,
    pub max_intensity: u8,
}

impl Ball {
    pub const DEFAULT: Self = Self::new(32, 255);

    /// # Panics
    ///
    /// Panics if `dim` is zero or odd.
    pub const fn new(dim: u32, max_intensity: u8) -> Self {
        assert!(dim != 0);
        assert!(dim % 2 == 0);

        Self { dim, max_intensity }
    }

    /// Side length of the generated quadrant.
    pub const fn half(&self) -> u32 {
        self.dim / 2
    }

    /// Number of table entries, one per quadrant cell.
    pub const fn entries(&self) -> usize {
        let half = self.half() as usize;
        half * half
    }

    pub fn center(&self) -> f64 {
        f64::from(self.dim) / 2.0
    }

    /// Euclidean distance of `(x, y)` from the center.
    pub fn distance(&self, x: u32, y: u32) -> f64 {
        let center = self.center();
        let dx = center - f64::from(x);
        let dy = center - f64::from(y);

        (dx * dx + dy * dy).sqrt()
    }

    /// Unquantized brightness, `max_intensity / dist`.
    ///
    /// The divisor is clamped to 1 so the center cell stays at `max_intensity`. With the
    /// quadrant iteration of [`Ball::cells`] and an even `dim` the clamp is never hit, the
    /// nearest generated cell is always `sqrt(2)` away.
    pub fn intensity(&self, x: u32, y: u32) -> f64 {
        f64::from(self.max_intensity) / self.distance(x, y).max(1.0)
    }

    /// Quantized brightness, truncated toward zero and floored at 0.
    pub fn value(&self, x: u32, y: u32) -> u8 {
        // `intensity <= max_intensity`, so the cast never saturates
        (self.intensity(x, y) - FLOOR_OFFSET).max(0.0) as u8
    }

    pub fn cells(&self) -> Cells {
        Cells::new(*self)
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::DEFAULT
    }
}
