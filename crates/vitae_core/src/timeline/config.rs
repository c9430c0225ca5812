//! Layout tuning knobs.

use serde::{Deserialize, Serialize};

/// Pixel and calendar constants used by [`crate::timeline::compute_timeline`].
///
/// `Default` reproduces the stock widget geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height reported when there is nothing to lay out.
    pub empty_height: u32,
    /// Lower bound on the height of a non-empty timeline.
    pub min_height: u32,
    /// Height added per record; wins over `min_height` for long lists.
    pub height_per_record: u32,
    pub min_block_height: f64,
    pub max_lane_width: f64,
    /// Horizontal space shared by the lanes of one overlap group.
    pub lane_budget: f64,
    pub lane_gap: f64,
    /// Calendar years added before the earliest and after the latest date.
    pub year_padding: i32,
    /// Optional floor for lane width in crowded groups. `None` lets widths
    /// shrink without bound.
    pub min_lane_width: Option<f64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            empty_height: 400,
            min_height: 600,
            height_per_record: 100,
            min_block_height: 20.0,
            max_lane_width: 200.0,
            lane_budget: 600.0,
            lane_gap: 10.0,
            year_padding: 1,
            min_lane_width: None,
        }
    }
}

impl LayoutConfig {
    /// Timeline height for `count` records.
    pub fn height_for(&self, count: usize) -> u32 {
        if count == 0 {
            return self.empty_height;
        }
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        self.min_height
            .max(count.saturating_mul(self.height_per_record))
    }

    /// Lane width for an overlap group of `group_size` blocks.
    pub fn lane_width_for(&self, group_size: usize) -> f64 {
        let shared = self.lane_budget / group_size.max(1) as f64;
        let width = self.max_lane_width.min(shared);
        match self.min_lane_width {
            Some(floor) => width.max(floor),
            None => width,
        }
    }
}
