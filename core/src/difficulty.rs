//! Difficulty scaling policy.
//!
//! Every obstacle dimension is described by a [`ScaledRange`]: one metric
//! interval at difficulty 0 and one at difficulty 1. The interval for any
//! difficulty in between is the linear blend of the two, and a value is drawn
//! uniformly inside it, independently for each obstacle instance.
//!
//! Variants never hard-code these numbers; they read them from the
//! [`DifficultyPolicy`] carried by the course config, so one policy object
//! (or a RON preset of it) tunes every variant at once.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Closed metric interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// A dimension whose interval moves with difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledRange {
    /// Interval at difficulty 0.0
    pub easy: Span,
    /// Interval at difficulty 1.0
    pub hard: Span,
}

impl ScaledRange {
    pub const fn linear(easy_min: f64, easy_max: f64, hard_min: f64, hard_max: f64) -> Self {
        Self {
            easy: Span::new(easy_min, easy_max),
            hard: Span::new(hard_min, hard_max),
        }
    }

    /// Same value at every difficulty.
    pub const fn fixed(v: f64) -> Self {
        Self::linear(v, v, v, v)
    }

    /// Interval at `difficulty` (clamped to [0, 1]).
    pub fn bounds(&self, difficulty: f64) -> Span {
        let t = difficulty.clamp(0.0, 1.0);
        let min = lerp(self.easy.min, self.hard.min, t);
        let max = lerp(self.easy.max, self.hard.max, t);
        // a preset written with min > max still yields a usable interval
        Span::new(min.min(max), min.max(max))
    }

    /// One uniform draw inside `bounds(difficulty)`.
    ///
    /// Exactly one random number is consumed per call, so two samples taken
    /// with identically seeded sources differ only through the interval.
    pub fn sample<R: RngCore + ?Sized>(&self, difficulty: f64, rng: &mut R) -> f64 {
        let span = self.bounds(difficulty);
        let u: f64 = rng.random();
        span.min + (span.max - span.min) * u
    }

    /// True when neither end of the interval shrinks as difficulty rises.
    pub fn is_non_decreasing(&self) -> bool {
        self.hard.min >= self.easy.min && self.hard.max >= self.easy.max
    }

    /// True when neither end of the interval grows as difficulty rises.
    pub fn is_non_increasing(&self) -> bool {
        self.hard.min <= self.easy.min && self.hard.max <= self.easy.max
    }

    // Stretch the hard end away from the easy end by `factor`
    fn harden(self, factor: f64) -> Self {
        Self {
            easy: self.easy,
            hard: Span::new(
                self.easy.min + (self.hard.min - self.easy.min) * factor,
                self.easy.max + (self.hard.max - self.easy.max) * factor,
            ),
        }
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StairRanges {
    /// Height gained per step (m)
    pub rise: ScaledRange,
    /// Tread depth along the course (m)
    pub depth: ScaledRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampRanges {
    /// Height difference between ramp ends (m)
    pub rise: ScaledRange,
    /// Ramp length along the course (m)
    pub length: ScaledRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapRanges {
    /// Pit length to jump across (m)
    pub length: ScaledRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformRanges {
    /// Landing platform length (m)
    pub length: ScaledRange,
    /// Platform top above ground (m)
    pub height: ScaledRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoneRanges {
    /// Edge of a square stone (m)
    pub size: ScaledRange,
    /// Pit between consecutive stones (m)
    pub gap: ScaledRange,
    /// Lateral distance of a stone from the midline (m)
    pub jitter: ScaledRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamRanges {
    /// Beam width across the course (m)
    pub width: ScaledRange,
    /// Beam segment length (m)
    pub length: ScaledRange,
    /// Lateral distance of a segment from the midline (m)
    pub offset: ScaledRange,
    /// Pit between consecutive segments (m)
    pub gap: ScaledRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarRanges {
    /// Pillar radius (m)
    pub radius: ScaledRange,
    /// Pillar height (m)
    pub height: ScaledRange,
    /// Lateral distance of a pillar from the midline (m)
    pub offset: ScaledRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HurdleRanges {
    /// Bar height (m)
    pub height: ScaledRange,
    /// Bar depth along the course (m)
    pub depth: ScaledRange,
}

/// Difficulty → dimension mapping shared by every terrain variant.
///
/// Defaults follow one convention: heights, gaps and pit depths grow with
/// difficulty, walkable widths and treads shrink, and obstacles pack tighter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyPolicy {
    pub stairs: StairRanges,
    pub ramps: RampRanges,
    pub gaps: GapRanges,
    pub platforms: PlatformRanges,
    pub stones: StoneRanges,
    pub beams: BeamRanges,
    pub pillars: PillarRanges,
    pub hurdles: HurdleRanges,
    /// Flat run-up between consecutive obstacles (m)
    pub spacing: ScaledRange,
    /// Depth of pits below the walking surface (m)
    pub pit_depth: ScaledRange,
}

impl Default for DifficultyPolicy {
    fn default() -> Self {
        Self {
            stairs: StairRanges {
                rise: ScaledRange::linear(0.05, 0.08, 0.15, 0.22),
                depth: ScaledRange::linear(0.40, 0.50, 0.30, 0.35),
            },
            ramps: RampRanges {
                rise: ScaledRange::linear(0.05, 0.15, 0.30, 0.50),
                length: ScaledRange::linear(1.00, 1.50, 0.80, 1.00),
            },
            gaps: GapRanges {
                length: ScaledRange::linear(0.10, 0.20, 0.50, 0.80),
            },
            platforms: PlatformRanges {
                length: ScaledRange::linear(1.00, 1.20, 0.60, 0.80),
                height: ScaledRange::linear(0.00, 0.05, 0.10, 0.30),
            },
            stones: StoneRanges {
                size: ScaledRange::linear(0.60, 0.80, 0.30, 0.40),
                gap: ScaledRange::linear(0.10, 0.15, 0.30, 0.45),
                jitter: ScaledRange::linear(0.00, 0.10, 0.20, 0.50),
            },
            beams: BeamRanges {
                width: ScaledRange::linear(0.50, 0.60, 0.20, 0.25),
                length: ScaledRange::linear(1.00, 1.20, 1.20, 1.60),
                offset: ScaledRange::linear(0.00, 0.10, 0.20, 0.50),
                gap: ScaledRange::linear(0.00, 0.00, 0.10, 0.20),
            },
            pillars: PillarRanges {
                radius: ScaledRange::linear(0.15, 0.20, 0.30, 0.40),
                height: ScaledRange::linear(0.80, 1.00, 1.00, 1.50),
                offset: ScaledRange::linear(0.30, 0.50, 0.80, 1.20),
            },
            hurdles: HurdleRanges {
                height: ScaledRange::linear(0.05, 0.10, 0.25, 0.40),
                depth: ScaledRange::linear(0.10, 0.20, 0.10, 0.20),
            },
            spacing: ScaledRange::linear(0.80, 1.00, 0.50, 0.70),
            pit_depth: ScaledRange::linear(0.30, 0.50, 1.00, 2.00),
        }
    }
}

impl DifficultyPolicy {
    /// Ranges that make an obstacle harder to clear as they grow.
    pub fn severity_ranges(&self) -> Vec<(&'static str, ScaledRange)> {
        vec![
            ("stairs.rise", self.stairs.rise),
            ("ramps.rise", self.ramps.rise),
            ("gaps.length", self.gaps.length),
            ("platforms.height", self.platforms.height),
            ("stones.gap", self.stones.gap),
            ("stones.jitter", self.stones.jitter),
            ("beams.offset", self.beams.offset),
            ("beams.gap", self.beams.gap),
            ("pillars.radius", self.pillars.radius),
            ("pillars.offset", self.pillars.offset),
            ("hurdles.height", self.hurdles.height),
            ("pit_depth", self.pit_depth),
        ]
    }

    /// Ranges that make an obstacle harder to cross as they shrink.
    pub fn footing_ranges(&self) -> Vec<(&'static str, ScaledRange)> {
        vec![
            ("stairs.depth", self.stairs.depth),
            ("platforms.length", self.platforms.length),
            ("stones.size", self.stones.size),
            ("beams.width", self.beams.width),
        ]
    }

    /// Push every severity range's hard end by `factor` (> 1 harsher, < 1 softer).
    pub fn scaled(&self, factor: f64) -> Self {
        let mut p = self.clone();
        p.stairs.rise = p.stairs.rise.harden(factor);
        p.ramps.rise = p.ramps.rise.harden(factor);
        p.gaps.length = p.gaps.length.harden(factor);
        p.platforms.height = p.platforms.height.harden(factor);
        p.stones.gap = p.stones.gap.harden(factor);
        p.stones.jitter = p.stones.jitter.harden(factor);
        p.beams.offset = p.beams.offset.harden(factor);
        p.beams.gap = p.beams.gap.harden(factor);
        p.hurdles.height = p.hurdles.height.harden(factor);
        p.pit_depth = p.pit_depth.harden(factor);
        p
    }
}
