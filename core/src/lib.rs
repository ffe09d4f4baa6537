// course-core builds obstacle-course terrains for legged-robot curricula:
// an elevation grid plus 8 goals, from (length, width, resolution, difficulty)
// and an injected random source.
pub mod canvas;
pub mod config;
pub mod course;
pub mod difficulty;
pub mod error;
pub mod goals;
pub mod primitives;
pub mod quantize;
pub mod render;
pub mod utils;
pub mod variants;

pub use canvas::{BoundsPolicy, ElevationCanvas, Region};
pub use config::{CourseConfig, ZoneParams};
pub use course::{Course, CourseContext, CourseGenerator, CourseParams, generate};
pub use difficulty::{DifficultyPolicy, ScaledRange, Span};
pub use error::{CourseError, Result};
pub use goals::{BackfillPolicy, FEATURE_GOALS, GOAL_COUNT, GoalSequencer, GridPoint};
pub use primitives::{Beam, Feature, Hurdle, Pillar, Pit, Platform, Primitive, Ramp, Staircase};
pub use quantize::Quantizer;
pub use render::preview_image;
pub use utils::{HeightMap2D, flatten2};
pub use variants::{TerrainVariant, VariantKind};
