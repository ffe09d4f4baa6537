use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{CourseError, Result};
use crate::utils::HeightMap2D;

/// What a write does when its index range leaves the grid (or the row window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoundsPolicy {
    /// Clip the range and write whatever is left.
    #[default]
    Clip,
    /// Refuse the write with `CourseError::OutOfBounds`.
    Strict,
}

/// Rows and columns actually written by one canvas call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl Region {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }
}

/// Mutable elevation grid, zero (flat ground) until painted.
///
/// Rows follow the course (x), columns run across it (y). Writes are
/// last-write-wins, so a feature painted over a pit fill replaces it.
#[derive(Debug, Clone)]
pub struct ElevationCanvas {
    heights: HeightMap2D,
    rows: usize,
    cols: usize,
    policy: BoundsPolicy,
    // rows writable right now; guards the spawn and terminal zones
    window: Range<usize>,
}

impl ElevationCanvas {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            heights: vec![vec![0.0f32; cols]; rows],
            rows,
            cols,
            policy: BoundsPolicy::default(),
            window: 0..rows,
        }
    }

    pub fn with_policy(mut self, policy: BoundsPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn policy(&self) -> BoundsPolicy {
        self.policy
    }

    pub fn height(&self, x: usize, y: usize) -> Option<f32> {
        self.heights.get(x).and_then(|row| row.get(y)).copied()
    }

    // Highest cell in row `x`, used to continue a feature from where the last one ended
    pub fn row_max(&self, x: usize) -> Option<f32> {
        self.heights
            .get(x)
            .map(|row| row.iter().copied().fold(f32::MIN, f32::max))
    }

    pub fn heights(&self) -> &HeightMap2D {
        &self.heights
    }

    pub fn into_heights(self) -> HeightMap2D {
        self.heights
    }

    /// Restrict writes to `rows` (intersected with the grid).
    pub fn set_row_window(&mut self, rows: Range<usize>) {
        let start = rows.start.min(self.rows);
        let end = rows.end.clamp(start, self.rows);
        self.window = start..end;
    }

    pub fn clear_row_window(&mut self) {
        self.window = 0..self.rows;
    }

    pub fn row_window(&self) -> Range<usize> {
        self.window.clone()
    }

    /// Set every cell in the half-open box `rows × cols` to `height`.
    pub fn paint(&mut self, rows: Range<i64>, cols: Range<i64>, height: f32) -> Result<Region> {
        let region = self.clip("region", rows, cols)?;
        for x in region.rows.clone() {
            self.heights[x][region.cols.clone()].fill(height);
        }
        Ok(region)
    }

    /// Row `x_start + i` gets `profile[i]` across `cols`; ramps and stairs.
    pub fn paint_profile(
        &mut self,
        x_start: i64,
        cols: Range<i64>,
        profile: &[f32],
    ) -> Result<Region> {
        let rows = x_start..x_start + profile.len() as i64;
        let region = self.clip("profile", rows, cols)?;
        for x in region.rows.clone() {
            let h = profile[(x as i64 - x_start) as usize];
            self.heights[x][region.cols.clone()].fill(h);
        }
        Ok(region)
    }

    /// Cells whose centre lies within `radius` cells of (`cx`, `cy`).
    pub fn paint_disc(&mut self, cx: f64, cy: f64, radius: f64, height: f32) -> Result<Region> {
        let rows = (cx - radius).floor() as i64..(cx + radius).ceil() as i64 + 1;
        let cols = (cy - radius).floor() as i64..(cy + radius).ceil() as i64 + 1;
        let bbox = self.clip("disc", rows, cols)?;

        let r2 = radius * radius;
        let mut written: Option<Region> = None;
        for x in bbox.rows.clone() {
            for y in bbox.cols.clone() {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.heights[x][y] = height;
                    written = Some(match written {
                        None => Region {
                            rows: x..x + 1,
                            cols: y..y + 1,
                        },
                        Some(r) => Region {
                            rows: r.rows.start.min(x)..r.rows.end.max(x + 1),
                            cols: r.cols.start.min(y)..r.cols.end.max(y + 1),
                        },
                    });
                }
            }
        }
        Ok(written.unwrap_or(Region {
            rows: bbox.rows.start..bbox.rows.start,
            cols: bbox.cols.start..bbox.cols.start,
        }))
    }

    // Intersect a requested box with the grid and row window.
    // Empty requests are always fine; anything else leaving bounds is an error
    // under the strict policy.
    fn clip(&self, what: &'static str, rows: Range<i64>, cols: Range<i64>) -> Result<Region> {
        let win = self.window.start as i64..self.window.end as i64;
        let grid_cols = 0..self.cols as i64;
        let requested = rows.start < rows.end && cols.start < cols.end;
        let outside = rows.start < win.start
            || rows.end > win.end
            || cols.start < grid_cols.start
            || cols.end > grid_cols.end;

        if requested && outside && self.policy == BoundsPolicy::Strict {
            return Err(CourseError::OutOfBounds {
                what,
                rows,
                cols,
                shape: self.shape(),
            });
        }

        Ok(Region {
            rows: clamp_range(rows, &win),
            cols: clamp_range(cols, &grid_cols),
        })
    }
}

fn clamp_range(r: Range<i64>, bounds: &Range<i64>) -> Range<usize> {
    let start = r.start.clamp(bounds.start, bounds.end);
    let end = r.end.clamp(start, bounds.end);
    start as usize..end as usize
}
