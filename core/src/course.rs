use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::canvas::ElevationCanvas;
use crate::config::CourseConfig;
use crate::difficulty::{DifficultyPolicy, ScaledRange};
use crate::error::{CourseError, Result};
use crate::goals::{GOAL_COUNT, GoalSequencer, GridPoint};
use crate::primitives::{Feature, Pit, Primitive, Staircase};
use crate::quantize::Quantizer;
use crate::utils::{HeightMap2D, flatten2};
use crate::variants::{TerrainVariant, VariantKind};

/// The four inputs of one generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseParams {
    pub length: f64,     // metres along the course
    pub width: f64,      // metres across it
    pub resolution: f64, // metres per grid cell
    pub difficulty: f64, // 0.0 ..= 1.0
}

impl CourseParams {
    pub fn new(length: f64, width: f64, resolution: f64, difficulty: f64) -> Result<Self> {
        let params = Self {
            length,
            width,
            resolution,
            difficulty,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("length", self.length),
            ("width", self.width),
            ("resolution", self.resolution),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(CourseError::invalid(name, v, "must be a finite positive number"));
            }
        }
        if !(0.0..=1.0).contains(&self.difficulty) {
            return Err(CourseError::invalid(
                "difficulty",
                self.difficulty,
                "must lie in [0, 1]",
            ));
        }
        Ok(())
    }

    /// Grid shape `(round(length/resolution), round(width/resolution))`.
    pub fn shape(&self) -> Result<(usize, usize)> {
        let q = Quantizer::new(self.resolution)?;
        let shape = (q.cells(self.length), q.cells(self.width));
        if shape.1 == 0 {
            return Err(CourseError::invalid(
                "width",
                self.width,
                "rounds to zero grid columns",
            ));
        }
        Ok(shape)
    }
}

/// A generated course: elevation grid plus the goals in traversal order.
#[derive(Debug, Clone)]
pub struct Course {
    variant: &'static str,
    params: CourseParams,
    heights: HeightMap2D,
    goals: [GridPoint; GOAL_COUNT],
}

impl Course {
    pub fn variant(&self) -> &'static str {
        self.variant
    }

    pub fn params(&self) -> &CourseParams {
        &self.params
    }

    pub fn shape(&self) -> (usize, usize) {
        (
            self.heights.len(),
            self.heights.first().map_or(0, |row| row.len()),
        )
    }

    pub fn height(&self, x: usize, y: usize) -> Option<f32> {
        self.heights.get(x).and_then(|row| row.get(y)).copied()
    }

    pub fn heights(&self) -> &HeightMap2D {
        &self.heights
    }

    pub fn goals(&self) -> &[GridPoint; GOAL_COUNT] {
        &self.goals
    }

    /// Goals in metres, for consumers working in world units.
    pub fn goal_positions(&self) -> [(f64, f64); GOAL_COUNT] {
        self.goals.map(|g| g.to_metric(self.params.resolution))
    }

    pub fn flatten(&self) -> Vec<f32> {
        flatten2(&self.heights)
    }

    pub fn into_parts(self) -> (HeightMap2D, [GridPoint; GOAL_COUNT]) {
        (self.heights, self.goals)
    }
}

/// Mutable state handed to a terrain variant while it builds a course.
///
/// Owns the canvas and the goal list for one call. The cursor only moves
/// forward, from the spawn zone end up to the obstacle limit (the first row
/// of the terminal zone); canvas writes are confined to that stretch.
pub struct CourseContext<'a> {
    variant: &'static str,
    canvas: ElevationCanvas,
    quantizer: Quantizer,
    goals: GoalSequencer,
    cursor: usize,
    limit: usize,
    mid_y: usize,
    difficulty: f64,
    policy: &'a DifficultyPolicy,
    rng: &'a mut dyn RngCore,
}

impl<'a> CourseContext<'a> {
    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn policy(&self) -> &'a DifficultyPolicy {
        self.policy
    }

    pub fn quantizer(&self) -> &Quantizer {
        &self.quantizer
    }

    pub fn canvas(&self) -> &ElevationCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut ElevationCanvas {
        &mut self.canvas
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First row of the terminal zone.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Rows left before the terminal zone.
    pub fn remaining(&self) -> usize {
        self.limit - self.cursor
    }

    pub fn mid_y(&self) -> usize {
        self.mid_y
    }

    /// Cursor row on the course midline; primitives are painted from here.
    pub fn origin(&self) -> GridPoint {
        GridPoint::new(self.cursor, self.mid_y)
    }

    pub fn cells(&self, metres: f64) -> usize {
        self.quantizer.cells(metres)
    }

    pub fn offset(&self, metres: f64) -> i64 {
        self.quantizer.quantize(metres)
    }

    /// Clamp a sideways offset so a band `width` cells wide stays on the
    /// canvas. A band wider than the canvas is centred instead.
    pub fn lateral(&self, offset: i64, width: usize) -> i64 {
        let cols = self.canvas.cols() as i64;
        let w = width as i64;
        let mid = self.mid_y as i64;
        let lo = w / 2 - mid;
        let hi = cols - w + w / 2 - mid;
        if lo > hi { 0 } else { offset.clamp(lo, hi) }
    }

    pub fn sample(&mut self, range: &ScaledRange) -> f64 {
        range.sample(self.difficulty, &mut *self.rng)
    }

    pub fn sample_cells(&mut self, range: &ScaledRange) -> usize {
        let m = self.sample(range);
        self.cells(m)
    }

    pub fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    pub fn advance(&mut self, cells: usize) {
        let next = (self.cursor + cells).min(self.limit);
        log::trace!("{}: cursor {} -> {}", self.variant, self.cursor, next);
        self.cursor = next;
    }

    /// Paint `primitive` at the cursor; the cursor does not move.
    pub fn place(&mut self, primitive: &dyn Primitive) -> Result<Feature> {
        let origin = self.origin();
        let feature = primitive.paint(&mut self.canvas, origin)?;
        if feature.is_empty() {
            log::warn!(
                "{}: {} at row {} clipped away entirely",
                self.variant,
                primitive.name(),
                self.cursor
            );
        } else {
            log::debug!(
                "{}: {} rows {:?} cols {:?} top {:.3}",
                self.variant,
                primitive.name(),
                feature.rows,
                feature.cols,
                feature.top
            );
        }
        Ok(feature)
    }

    /// Paint a flight of stairs at the cursor; one footprint per surviving step.
    pub fn place_stairs(&mut self, stairs: &Staircase) -> Result<Vec<Feature>> {
        let origin = self.origin();
        let steps = stairs.paint_steps(&mut self.canvas, origin)?;
        log::debug!(
            "{}: staircase from row {}, {} of {} steps, rise {:.3}",
            self.variant,
            origin.x,
            steps.len(),
            stairs.steps,
            stairs.rise
        );
        Ok(steps)
    }

    /// Record the next feature goal.
    pub fn goal(&mut self, point: GridPoint) -> Result<()> {
        self.goals.record(point)?;
        Ok(())
    }

    /// Sink everything from the cursor to the terminal zone; features painted
    /// afterwards sit on top of it.
    pub fn fill_pit(&mut self) -> Result<Feature> {
        let policy = self.policy;
        let depth = self.sample(&policy.pit_depth) as f32;
        self.place(&Pit {
            length: self.remaining(),
            width: None,
            depth,
        })
    }

    fn finish(mut self, config: &CourseConfig) -> Result<(HeightMap2D, [GridPoint; GOAL_COUNT])> {
        let rows = self.canvas.rows();
        self.canvas.clear_row_window();
        let cols = self.canvas.cols() as i64;
        self.canvas.paint(self.cursor as i64..rows as i64, 0..cols, 0.0)?;

        let offset = self.quantizer.cells(config.zones.goal_offset).max(1);
        let terminal = GridPoint::new((self.cursor + offset).min(rows - 1), self.mid_y);
        let goals = self.goals.finish(terminal, config.backfill)?;
        Ok((self.canvas.into_heights(), goals))
    }
}

/// Builds courses for any variant under one configuration.
#[derive(Debug, Clone, Default)]
pub struct CourseGenerator {
    config: CourseConfig,
}

impl CourseGenerator {
    pub fn new(config: CourseConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CourseConfig {
        &self.config
    }

    pub fn generate(
        &self,
        variant: &dyn TerrainVariant,
        params: &CourseParams,
        rng: &mut dyn RngCore,
    ) -> Result<Course> {
        params.validate()?;
        let quantizer = Quantizer::new(params.resolution)?;
        let (rows, cols) = params.shape()?;

        let zones = &self.config.zones;
        let spawn_end = quantizer.cells(zones.spawn_length);
        let terminal = quantizer.cells(zones.terminal_length);
        if spawn_end == 0 || terminal == 0 {
            return Err(CourseError::invalid(
                "resolution",
                params.resolution,
                "too coarse for the spawn and terminal zones",
            ));
        }
        if rows <= spawn_end + terminal {
            return Err(CourseError::OutOfBounds {
                what: "spawn and terminal zones",
                rows: 0..(spawn_end + terminal + 1) as i64,
                cols: 0..cols as i64,
                shape: (rows, cols),
            });
        }
        let limit = rows - terminal;
        let mid_y = cols / 2;

        let mut canvas = ElevationCanvas::new(rows, cols).with_policy(self.config.bounds);
        canvas.set_row_window(spawn_end..limit);

        // goal 0 always inside the spawn zone, even when the offset rounds to 0
        let spawn_goal = GridPoint::new(
            spawn_end.saturating_sub(quantizer.cells(zones.goal_offset).max(1)),
            mid_y,
        );
        let mut ctx = CourseContext {
            variant: variant.name(),
            canvas,
            quantizer,
            goals: GoalSequencer::new(variant.name(), spawn_goal, (rows, cols)),
            cursor: spawn_end,
            limit,
            mid_y,
            difficulty: params.difficulty,
            policy: &self.config.difficulty,
            rng,
        };

        variant.build(&mut ctx)?;
        let (heights, goals) = ctx.finish(&self.config)?;

        log::debug!(
            "generated {} course {}x{} at difficulty {:.2}",
            variant.name(),
            rows,
            cols,
            params.difficulty
        );
        Ok(Course {
            variant: variant.name(),
            params: *params,
            heights,
            goals,
        })
    }

    pub fn generate_kind(
        &self,
        kind: VariantKind,
        params: &CourseParams,
        rng: &mut dyn RngCore,
    ) -> Result<Course> {
        self.generate(kind.variant(), params, rng)
    }

    /// Generate with a fresh `Xoshiro256StarStar` seeded from `seed`.
    pub fn generate_seeded(
        &self,
        kind: VariantKind,
        params: &CourseParams,
        seed: u64,
    ) -> Result<Course> {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        self.generate_kind(kind, params, &mut rng)
    }
}

/// One-call entry point with the default configuration.
pub fn generate(
    length: f64,
    width: f64,
    resolution: f64,
    difficulty: f64,
    kind: VariantKind,
    seed: u64,
) -> Result<Course> {
    let params = CourseParams::new(length, width, resolution, difficulty)?;
    CourseGenerator::default().generate_seeded(kind, &params, seed)
}
