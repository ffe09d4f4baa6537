// Terrain variants: named strategies composing primitives into a course.
// Each places exactly FEATURE_GOALS features between the spawn and terminal
// zones and records one goal per feature.
pub mod hurdles;
pub mod pits;
pub mod ramps;
pub mod slalom;
pub mod stairs;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::course::CourseContext;
use crate::error::{CourseError, Result};

pub use hurdles::Hurdles;
pub use pits::{BalanceBeams, Gaps, SteppingStones};
pub use ramps::Ramps;
pub use slalom::PillarSlalom;
pub use stairs::{Stairs, StairsThenRamps};

pub trait TerrainVariant: Send + Sync {
    fn name(&self) -> &'static str;

    // Place features starting at the context cursor, recording one goal each.
    // The spawn goal, the terminal zone and goal 7 are handled by the caller.
    fn build(&self, ctx: &mut CourseContext<'_>) -> Result<()>;
}

/// Every built-in variant, selectable by name or from a config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    Stairs,
    Ramps,
    Gaps,
    SteppingStones,
    BalanceBeams,
    PillarSlalom,
    Hurdles,
    StairsThenRamps,
}

impl VariantKind {
    pub const ALL: [VariantKind; 8] = [
        VariantKind::Stairs,
        VariantKind::Ramps,
        VariantKind::Gaps,
        VariantKind::SteppingStones,
        VariantKind::BalanceBeams,
        VariantKind::PillarSlalom,
        VariantKind::Hurdles,
        VariantKind::StairsThenRamps,
    ];

    pub fn variant(self) -> &'static dyn TerrainVariant {
        match self {
            VariantKind::Stairs => &Stairs,
            VariantKind::Ramps => &Ramps,
            VariantKind::Gaps => &Gaps,
            VariantKind::SteppingStones => &SteppingStones,
            VariantKind::BalanceBeams => &BalanceBeams,
            VariantKind::PillarSlalom => &PillarSlalom,
            VariantKind::Hurdles => &Hurdles,
            VariantKind::StairsThenRamps => &StairsThenRamps,
        }
    }

    pub fn name(self) -> &'static str {
        self.variant().name()
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariantKind {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self> {
        VariantKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| CourseError::UnknownVariant(s.to_string()))
    }
}
