use crate::course::CourseContext;
use crate::error::Result;
use crate::goals::{FEATURE_GOALS, GridPoint};
use crate::primitives::Pillar;
use crate::variants::TerrainVariant;

/// Pillars alternating left and right; the goals sit in the open lane
/// across the midline from each pillar.
pub struct PillarSlalom;

impl TerrainVariant for PillarSlalom {
    fn name(&self) -> &'static str {
        "pillar_slalom"
    }

    fn build(&self, ctx: &mut CourseContext<'_>) -> Result<()> {
        let policy = ctx.policy();
        let resolution = ctx.quantizer().resolution();
        let height = ctx.sample(&policy.pillars.height) as f32;
        let mut side: i64 = if ctx.coin() { 1 } else { -1 };

        for _ in 0..FEATURE_GOALS {
            let run_up = ctx.sample_cells(&policy.spacing);
            ctx.advance(run_up);

            let radius = (ctx.sample(&policy.pillars.radius) / resolution).max(0.5);
            let lateral = ctx.sample(&policy.pillars.offset);
            let diameter = (radius * 2.0).ceil() as usize;
            let offset = ctx.lateral(side * ctx.offset(lateral), diameter);
            let pillar = Pillar {
                radius,
                height,
                y_offset: offset,
            };
            let f = ctx.place(&pillar)?;

            let lane = (ctx.mid_y() as i64 - offset).max(0) as usize;
            ctx.goal(GridPoint::new(f.center().x, lane))?;
            ctx.advance(pillar.diameter());
            side = -side;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PillarSlalom;
    use crate::config::CourseConfig;
    use crate::course::{CourseGenerator, CourseParams};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn goals_avoid_pillars() {
        let params = CourseParams::new(20.0, 4.0, 0.05, 0.5).unwrap();
        let generator = CourseGenerator::new(CourseConfig::preset_strict()).unwrap();
        let mut rng = Xoshiro256StarStar::seed_from_u64(17);
        let course = generator.generate(&PillarSlalom, &params, &mut rng).unwrap();

        let goals = course.goals();
        for g in &goals[1..7] {
            assert_eq!(course.height(g.x, g.y), Some(0.0));
            // the pillar itself stands on the other side of the midline
            let mirror = 2 * 40 - g.y;
            assert!(course.height(g.x, mirror).unwrap() > 0.0);
        }
        assert!(goals.windows(2).all(|w| w[0].x < w[1].x));
    }
}
