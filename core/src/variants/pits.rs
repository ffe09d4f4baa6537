// Variants built over a pit: the obstacle stretch is sunk first, then the
// walkable pieces are painted on top of it.
use crate::course::CourseContext;
use crate::error::Result;
use crate::goals::FEATURE_GOALS;
use crate::primitives::{Beam, Platform};
use crate::variants::TerrainVariant;

/// Platforms across the full width with pits to jump between them.
pub struct Gaps;

impl TerrainVariant for Gaps {
    fn name(&self) -> &'static str {
        "gaps"
    }

    fn build(&self, ctx: &mut CourseContext<'_>) -> Result<()> {
        let policy = ctx.policy();
        ctx.fill_pit()?;

        for _ in 0..FEATURE_GOALS {
            let gap = ctx.sample_cells(&policy.gaps.length).max(1);
            ctx.advance(gap);

            let platform = Platform {
                length: ctx.sample_cells(&policy.platforms.length).max(1),
                width: None,
                height: ctx.sample(&policy.platforms.height) as f32,
                y_offset: 0,
            };
            let f = ctx.place(&platform)?;
            ctx.goal(f.center())?;
            ctx.advance(platform.length);
        }
        Ok(())
    }
}

/// Square stones scattered either side of the midline.
pub struct SteppingStones;

impl TerrainVariant for SteppingStones {
    fn name(&self) -> &'static str {
        "stepping_stones"
    }

    fn build(&self, ctx: &mut CourseContext<'_>) -> Result<()> {
        let policy = ctx.policy();
        ctx.fill_pit()?;

        for _ in 0..FEATURE_GOALS {
            let gap = ctx.sample_cells(&policy.stones.gap).max(1);
            ctx.advance(gap);

            let size = ctx.sample_cells(&policy.stones.size).max(1);
            let jitter = ctx.sample(&policy.stones.jitter);
            let side = if ctx.coin() { 1 } else { -1 };
            let stone = Platform {
                length: size,
                width: Some(size),
                height: 0.0,
                y_offset: ctx.lateral(side * ctx.offset(jitter), size),
            };
            let f = ctx.place(&stone)?;
            ctx.goal(f.center())?;
            ctx.advance(size);
        }
        Ok(())
    }
}

/// Narrow beam segments zig-zagging about the midline.
pub struct BalanceBeams;

impl TerrainVariant for BalanceBeams {
    fn name(&self) -> &'static str {
        "balance_beams"
    }

    fn build(&self, ctx: &mut CourseContext<'_>) -> Result<()> {
        let policy = ctx.policy();
        ctx.fill_pit()?;

        // one width for the whole run
        let width = ctx.sample_cells(&policy.beams.width).max(1);
        let mut side: i64 = if ctx.coin() { 1 } else { -1 };

        for _ in 0..FEATURE_GOALS {
            let gap = ctx.sample_cells(&policy.beams.gap);
            ctx.advance(gap);

            let offset = ctx.sample(&policy.beams.offset);
            let beam = Beam {
                length: ctx.sample_cells(&policy.beams.length).max(1),
                width,
                height: 0.0,
                y_offset: ctx.lateral(side * ctx.offset(offset), width),
            };
            let f = ctx.place(&beam)?;
            ctx.goal(f.center())?;
            ctx.advance(beam.length);
            side = -side;
        }
        Ok(())
    }
}
