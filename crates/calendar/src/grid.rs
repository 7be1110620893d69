use serde::{Deserialize, Serialize};

/// Geometry of the week-view grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// First hour shown at the top of the grid, 24-hour clock
    pub start_hour: u8,
    pub pixels_per_minute: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: 8,
            pixels_per_minute: 1.0,
        }
    }
}

impl GridConfig {
    /// Minutes since midnight at the top edge of the grid
    pub fn reference_minute(&self) -> i32 {
        i32::from(self.start_hour) * 60
    }

    /// Vertical offset for a block starting at `minutes`; negative when above the grid
    pub fn top_offset(&self, minutes: u16) -> f32 {
        (i32::from(minutes) - self.reference_minute()) as f32 * self.pixels_per_minute
    }

    pub fn height(&self, duration_minutes: u16) -> f32 {
        f32::from(duration_minutes) * self.pixels_per_minute
    }
}
