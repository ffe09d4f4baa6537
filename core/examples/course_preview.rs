// Generates one course per built-in variant and saves a top-down preview
// of each, goals marked in red:
// course_<variant>.png

use course_core::{CourseGenerator, CourseParams, VariantKind, preview_image};
use image::imageops::{FilterType, resize};
use std::path::Path;

const SEED: u64 = 2025;
const SCALE: u32 = 4; // pixels per grid cell

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let params = CourseParams::new(12.0, 4.0, 0.05, 0.6)?;
    let generator = CourseGenerator::default();

    for kind in VariantKind::ALL {
        let course = generator.generate_seeded(kind, &params, SEED)?;
        let img = preview_image(&course);
        let (w, h) = img.dimensions();
        let img = resize(&img, w * SCALE, h * SCALE, FilterType::Nearest);

        let filename = format!("course_{}.png", kind);
        img.save(Path::new(&filename))?;
        println!("Saved {} ({}x{} cells)", filename, h, w);
    }
    Ok(())
}
