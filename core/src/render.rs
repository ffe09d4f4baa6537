use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

use crate::course::Course;
use crate::utils::height_range;

const GOAL_COLOR: Rgb<u8> = Rgb([220, 20, 60]);
const GOAL_RADIUS: i64 = 1;

// Colour ramp over elevation: pits dark, ground neutral, raised features warm.
// Domain positions are relative to ground level inside [min, max].
fn elevation_gradient(ground: f32) -> Gradient<LinSrgb> {
    let g = ground.clamp(0.01, 0.99);
    Gradient::with_domain(vec![
        (0.0, LinSrgb::new(0.02, 0.02, 0.08)), // pit floor
        (g * 0.999, LinSrgb::new(0.15, 0.15, 0.3)), // pit rim
        (g, LinSrgb::new(0.55, 0.6, 0.55)), // ground
        (1.0, LinSrgb::new(0.95, 0.55, 0.2)), // highest feature
    ])
}

/// Top-down preview of a course, one pixel per cell.
///
/// Image rows follow the course (x), columns run across it (y). Goals are
/// drawn as small red squares.
pub fn preview_image(course: &Course) -> RgbImage {
    let (rows, cols) = course.shape();
    let mut img = RgbImage::new(cols as u32, rows as u32);

    let (min, max) = height_range(course.heights());
    let min = min.min(0.0);
    let max = max.max(0.0);
    let range = (max - min).max(0.001);
    let gradient = elevation_gradient((0.0 - min) / range);

    for (x, row) in course.heights().iter().enumerate() {
        for (y, &h) in row.iter().enumerate() {
            let col: LinSrgb = gradient.get((h - min) / range);
            let rgb = col.into_format::<u8>();
            img.put_pixel(y as u32, x as u32, Rgb([rgb.red, rgb.green, rgb.blue]));
        }
    }

    for goal in course.goals() {
        for dx in -GOAL_RADIUS..=GOAL_RADIUS {
            for dy in -GOAL_RADIUS..=GOAL_RADIUS {
                let px = goal.y as i64 + dy;
                let py = goal.x as i64 + dx;
                if px >= 0 && py >= 0 && (px as usize) < cols && (py as usize) < rows {
                    img.put_pixel(px as u32, py as u32, GOAL_COLOR);
                }
            }
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::{GOAL_COLOR, preview_image};
    use crate::course::generate;
    use crate::variants::VariantKind;

    #[test]
    fn preview_matches_grid_and_marks_goals() {
        let course = generate(12.0, 4.0, 0.1, 0.5, VariantKind::Gaps, 8).unwrap();
        let img = preview_image(&course);
        assert_eq!(img.dimensions(), (40, 120));

        let g = course.goals()[0];
        assert_eq!(*img.get_pixel(g.y as u32, g.x as u32), GOAL_COLOR);
        // spawn ground away from the goal is not goal-coloured
        assert_ne!(*img.get_pixel(0, 0), GOAL_COLOR);
    }
}
