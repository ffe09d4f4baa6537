use crate::course::CourseContext;
use crate::error::Result;
use crate::goals::FEATURE_GOALS;
use crate::primitives::{Ramp, Staircase};
use crate::variants::TerrainVariant;

/// One ascending flight, a goal on every step.
pub struct Stairs;

impl TerrainVariant for Stairs {
    fn name(&self) -> &'static str {
        "stairs"
    }

    fn build(&self, ctx: &mut CourseContext<'_>) -> Result<()> {
        let p = &ctx.policy().stairs;
        let stairs = Staircase {
            steps: FEATURE_GOALS,
            step_depth: ctx.sample_cells(&p.depth).max(1),
            width: None,
            base_height: 0.0,
            rise: ctx.sample(&p.rise) as f32,
        };

        for step in ctx.place_stairs(&stairs)? {
            ctx.goal(step.center())?;
        }
        ctx.advance(stairs.steps * stairs.step_depth);
        Ok(())
    }
}

const CLIMB_STEPS: usize = 3;

/// A short climb followed by ramps that wave back down to ground level.
pub struct StairsThenRamps;

impl TerrainVariant for StairsThenRamps {
    fn name(&self) -> &'static str {
        "stairs_then_ramps"
    }

    fn build(&self, ctx: &mut CourseContext<'_>) -> Result<()> {
        let policy = ctx.policy();
        let stairs = Staircase {
            steps: CLIMB_STEPS,
            step_depth: ctx.sample_cells(&policy.stairs.depth).max(1),
            width: None,
            base_height: 0.0,
            rise: ctx.sample(&policy.stairs.rise) as f32,
        };
        for step in ctx.place_stairs(&stairs)? {
            ctx.goal(step.center())?;
        }
        ctx.advance(stairs.steps * stairs.step_depth);

        // continue from whatever height the climb actually reached
        let top = ctx
            .canvas()
            .row_max(ctx.cursor().saturating_sub(1))
            .unwrap_or(0.0)
            .max(0.0);

        let mut start = top;
        for end in [top * 0.5, top, 0.0] {
            let ramp = Ramp {
                length: ctx.sample_cells(&policy.ramps.length).max(2),
                width: None,
                start_height: start,
                end_height: end,
                y_offset: 0,
            };
            let f = ctx.place(&ramp)?;
            ctx.goal(f.center())?;
            ctx.advance(ramp.length);
            start = end;
        }
        Ok(())
    }
}
