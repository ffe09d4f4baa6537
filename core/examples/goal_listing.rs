use course_core::{VariantKind, generate};

fn main() {
    env_logger::init();

    // 12 m × 4 m staircase at 10 cm resolution, medium difficulty
    let course = match generate(12.0, 4.0, 0.1, 0.5, VariantKind::Stairs, 2025) {
        Ok(course) => course,
        Err(e) => {
            eprintln!("generation failed: {}", e);
            std::process::exit(1);
        }
    };

    let (rows, cols) = course.shape();
    println!("{} course, grid {}x{}", course.variant(), rows, cols);

    // Print the goals in grid cells and metres
    for (i, (g, (mx, my))) in course
        .goals()
        .iter()
        .zip(course.goal_positions())
        .enumerate()
    {
        let h = course.height(g.x, g.y).unwrap_or(0.0);
        println!(
            "goal {}: cell ({:>3}, {:>2})  {:>5.2} m, {:>4.2} m  height {:.3}",
            i, g.x, g.y, mx, my, h
        );
    }

    // Print the elevation profile along the midline, every 4th row
    for x in (0..rows).step_by(4) {
        print!("{:>6.3} ", course.height(x, cols / 2).unwrap_or(0.0));
    }
    println!();
}
