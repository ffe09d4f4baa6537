use crate::course::CourseContext;
use crate::error::Result;
use crate::goals::FEATURE_GOALS;
use crate::primitives::Ramp;
use crate::variants::TerrainVariant;

/// Up-slope, down-slope pairs separated by flat run-ups.
pub struct Ramps;

impl TerrainVariant for Ramps {
    fn name(&self) -> &'static str {
        "ramps"
    }

    fn build(&self, ctx: &mut CourseContext<'_>) -> Result<()> {
        let policy = ctx.policy();
        let mut crest = 0.0f32;

        for i in 0..FEATURE_GOALS {
            let climbing = i % 2 == 0;
            let (start_height, end_height) = if climbing {
                crest = ctx.sample(&policy.ramps.rise) as f32;
                (0.0, crest)
            } else {
                (crest, 0.0)
            };

            let ramp = Ramp {
                length: ctx.sample_cells(&policy.ramps.length).max(2),
                width: None,
                start_height,
                end_height,
                y_offset: 0,
            };
            let f = ctx.place(&ramp)?;
            ctx.goal(f.center())?;
            ctx.advance(ramp.length);

            if !climbing {
                let run_up = ctx.sample_cells(&policy.spacing);
                ctx.advance(run_up);
            }
        }
        Ok(())
    }
}
