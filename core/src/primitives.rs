use std::ops::Range;

use crate::canvas::{ElevationCanvas, Region};
use crate::error::Result;
use crate::goals::GridPoint;

// Obstacle shape writers.
// Every primitive paints relative to an origin: `origin.x` is the row where the
// feature starts (the course cursor) and `origin.y` the column of the course
// midline. Dimensions are already quantized to cells; heights are metres.

/// Footprint a primitive actually wrote, after clipping.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
    /// Walking-surface height at the feature's far end
    pub top: f32,
}

impl Feature {
    fn from_region(region: Region, top: f32) -> Self {
        Self {
            rows: region.rows,
            cols: region.cols,
            top,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    /// Midpoint of the footprint; the natural goal for this feature.
    pub fn center(&self) -> GridPoint {
        GridPoint::new(
            (self.rows.start + self.rows.end) / 2,
            (self.cols.start + self.cols.end) / 2,
        )
    }

    /// First row after the feature.
    pub fn end(&self) -> usize {
        self.rows.end
    }
}

pub trait Primitive {
    /// Short name for logs and bounds errors.
    fn name(&self) -> &'static str;

    fn paint(&self, canvas: &mut ElevationCanvas, origin: GridPoint) -> Result<Feature>;
}

// Columns of a band `width` cells wide centred `y_offset` cells off the midline
// (`None` covers the whole canvas width).
fn band(
    canvas: &ElevationCanvas,
    origin: GridPoint,
    width: Option<usize>,
    y_offset: i64,
) -> Range<i64> {
    match width {
        None => 0..canvas.cols() as i64,
        Some(w) => {
            let start = origin.y as i64 + y_offset - (w / 2) as i64;
            start..start + w as i64
        }
    }
}

fn rows(origin: GridPoint, length: usize) -> Range<i64> {
    origin.x as i64..(origin.x + length) as i64
}

/// Flat box, raised (positive height) or sunken.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub length: usize,
    pub width: Option<usize>,
    pub height: f32,
    pub y_offset: i64,
}

impl Primitive for Platform {
    fn name(&self) -> &'static str {
        "platform"
    }

    fn paint(&self, canvas: &mut ElevationCanvas, origin: GridPoint) -> Result<Feature> {
        let cols = band(canvas, origin, self.width, self.y_offset);
        let region = canvas.paint(rows(origin, self.length), cols, self.height)?;
        Ok(Feature::from_region(region, self.height))
    }
}

/// Linear slope from `start_height` to `end_height` along the course.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    pub length: usize,
    pub width: Option<usize>,
    pub start_height: f32,
    pub end_height: f32,
    pub y_offset: i64,
}

impl Ramp {
    // Evenly spaced heights, both endpoints included
    pub fn profile(&self) -> Vec<f32> {
        match self.length {
            0 => Vec::new(),
            1 => vec![self.start_height],
            n => {
                let step = (self.end_height - self.start_height) / (n - 1) as f32;
                (0..n).map(|i| self.start_height + step * i as f32).collect()
            }
        }
    }
}

impl Primitive for Ramp {
    fn name(&self) -> &'static str {
        "ramp"
    }

    fn paint(&self, canvas: &mut ElevationCanvas, origin: GridPoint) -> Result<Feature> {
        let cols = band(canvas, origin, self.width, self.y_offset);
        let region = canvas.paint_profile(origin.x as i64, cols, &self.profile())?;
        Ok(Feature::from_region(region, self.end_height))
    }
}

/// Steps of equal depth, each `rise` higher than the one before.
/// A negative rise walks down; one-cell steps degenerate to a ramp.
#[derive(Debug, Clone, PartialEq)]
pub struct Staircase {
    pub steps: usize,
    pub step_depth: usize,
    pub width: Option<usize>,
    pub base_height: f32,
    pub rise: f32,
}

impl Staircase {
    pub fn step_height(&self, step: usize) -> f32 {
        self.base_height + self.rise * (step + 1) as f32
    }

    pub fn profile(&self) -> Vec<f32> {
        (0..self.steps)
            .flat_map(|s| std::iter::repeat_n(self.step_height(s), self.step_depth))
            .collect()
    }

    /// Paint the whole flight and return one footprint per surviving step.
    pub fn paint_steps(
        &self,
        canvas: &mut ElevationCanvas,
        origin: GridPoint,
    ) -> Result<Vec<Feature>> {
        let cols = band(canvas, origin, self.width, 0);
        let region = canvas.paint_profile(origin.x as i64, cols, &self.profile())?;

        let mut steps = Vec::with_capacity(self.steps);
        for s in 0..self.steps {
            let start = (origin.x + s * self.step_depth).max(region.rows.start);
            let end = (origin.x + (s + 1) * self.step_depth).min(region.rows.end);
            if start < end && !region.cols.is_empty() {
                steps.push(Feature {
                    rows: start..end,
                    cols: region.cols.clone(),
                    top: self.step_height(s),
                });
            }
        }
        Ok(steps)
    }
}

impl Primitive for Staircase {
    fn name(&self) -> &'static str {
        "staircase"
    }

    fn paint(&self, canvas: &mut ElevationCanvas, origin: GridPoint) -> Result<Feature> {
        let steps = self.paint_steps(canvas, origin)?;
        Ok(match (steps.first(), steps.last()) {
            (Some(first), Some(last)) => Feature {
                rows: first.rows.start..last.rows.end,
                cols: first.cols.clone(),
                top: last.top,
            },
            _ => Feature {
                rows: origin.x..origin.x,
                cols: 0..0,
                top: self.base_height,
            },
        })
    }
}

/// Region sunk `depth` metres below the walking surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Pit {
    pub length: usize,
    pub width: Option<usize>,
    pub depth: f32,
}

impl Primitive for Pit {
    fn name(&self) -> &'static str {
        "pit"
    }

    fn paint(&self, canvas: &mut ElevationCanvas, origin: GridPoint) -> Result<Feature> {
        let cols = band(canvas, origin, self.width, 0);
        let region = canvas.paint(rows(origin, self.length), cols, -self.depth)?;
        Ok(Feature::from_region(region, -self.depth))
    }
}

/// Round column starting at `origin.x`, shifted `y_offset` cells sideways.
#[derive(Debug, Clone, PartialEq)]
pub struct Pillar {
    pub radius: f64,
    pub height: f32,
    pub y_offset: i64,
}

impl Pillar {
    pub fn diameter(&self) -> usize {
        (self.radius * 2.0).ceil() as usize
    }
}

impl Primitive for Pillar {
    fn name(&self) -> &'static str {
        "pillar"
    }

    fn paint(&self, canvas: &mut ElevationCanvas, origin: GridPoint) -> Result<Feature> {
        let cx = origin.x as f64 + self.radius;
        let cy = origin.y as f64 + self.y_offset as f64 + 0.5;
        let region = canvas.paint_disc(cx, cy, self.radius, self.height)?;
        Ok(Feature::from_region(region, self.height))
    }
}

/// Narrow raised strip to balance along.
#[derive(Debug, Clone, PartialEq)]
pub struct Beam {
    pub length: usize,
    pub width: usize,
    pub height: f32,
    pub y_offset: i64,
}

impl Primitive for Beam {
    fn name(&self) -> &'static str {
        "beam"
    }

    fn paint(&self, canvas: &mut ElevationCanvas, origin: GridPoint) -> Result<Feature> {
        let cols = band(canvas, origin, Some(self.width.max(1)), self.y_offset);
        let region = canvas.paint(rows(origin, self.length), cols, self.height)?;
        Ok(Feature::from_region(region, self.height))
    }
}

/// Thin full-width bar to step over.
#[derive(Debug, Clone, PartialEq)]
pub struct Hurdle {
    pub depth: usize,
    pub height: f32,
}

impl Primitive for Hurdle {
    fn name(&self) -> &'static str {
        "hurdle"
    }

    fn paint(&self, canvas: &mut ElevationCanvas, origin: GridPoint) -> Result<Feature> {
        let cols = 0..canvas.cols() as i64;
        let region = canvas.paint(rows(origin, self.depth.max(1)), cols, self.height)?;
        // walking surface behind the bar is ground again
        Ok(Feature::from_region(region, 0.0))
    }
}
