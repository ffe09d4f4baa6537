use crate::course::CourseContext;
use crate::error::Result;
use crate::goals::FEATURE_GOALS;
use crate::primitives::Hurdle;
use crate::variants::TerrainVariant;

/// Full-width bars to step or hop over.
pub struct Hurdles;

impl TerrainVariant for Hurdles {
    fn name(&self) -> &'static str {
        "hurdles"
    }

    fn build(&self, ctx: &mut CourseContext<'_>) -> Result<()> {
        let policy = ctx.policy();

        for _ in 0..FEATURE_GOALS {
            let run_up = ctx.sample_cells(&policy.spacing).max(1);
            ctx.advance(run_up);

            let hurdle = Hurdle {
                depth: ctx.sample_cells(&policy.hurdles.depth).max(1),
                height: ctx.sample(&policy.hurdles.height) as f32,
            };
            let f = ctx.place(&hurdle)?;
            ctx.goal(f.center())?;
            ctx.advance(hurdle.depth);
        }
        Ok(())
    }
}
