use serde::{Deserialize, Serialize};

use crate::error::{CourseError, Result};

/// Goals returned with every course.
pub const GOAL_COUNT: usize = 8;
/// Goals tied to obstacle features: every slot except spawn (0) and terminal (7).
pub const FEATURE_GOALS: usize = GOAL_COUNT - 2;

/// A cell of the elevation grid, `x` along the course and `y` across it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: usize,
    pub y: usize,
}

impl GridPoint {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn to_metric(self, resolution: f64) -> (f64, f64) {
        (self.x as f64 * resolution, self.y as f64 * resolution)
    }
}

/// What happens when a variant leaves feature-goal slots empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BackfillPolicy {
    /// Fill each empty slot with the goal before it (the spawn goal if none).
    #[default]
    RepeatLast,
    /// Fail with `CourseError::UnderfilledGoals`.
    Reject,
}

/// Fills the fixed goal list in traversal order.
///
/// Slot 0 is set on construction, feature slots are filled one `record` at a
/// time, and `finish` writes the terminal goal. Goals never move backwards
/// along the course and never leave the grid.
#[derive(Debug, Clone)]
pub struct GoalSequencer {
    variant: &'static str,
    goals: [Option<GridPoint>; GOAL_COUNT],
    next: usize,
    shape: (usize, usize),
}

impl GoalSequencer {
    pub fn new(variant: &'static str, spawn: GridPoint, shape: (usize, usize)) -> Self {
        let mut seq = Self {
            variant,
            goals: [None; GOAL_COUNT],
            next: 1,
            shape,
        };
        seq.goals[0] = Some(seq.clip(spawn));
        seq
    }

    /// Feature goals recorded so far.
    pub fn recorded(&self) -> usize {
        self.next - 1
    }

    pub fn last(&self) -> GridPoint {
        self.goals[..self.next]
            .iter()
            .rev()
            .find_map(|g| *g)
            .unwrap_or_default()
    }

    /// Write the next feature slot and return its index.
    pub fn record(&mut self, point: GridPoint) -> Result<usize> {
        if self.next > FEATURE_GOALS {
            return Err(CourseError::GoalOverflow {
                variant: self.variant,
                capacity: FEATURE_GOALS,
            });
        }

        let mut p = self.clip(point);
        let prev = self.last();
        if p.x < prev.x {
            log::debug!(
                "{}: goal {} at x={} behind x={}, moved forward",
                self.variant,
                self.next,
                p.x,
                prev.x
            );
            p.x = prev.x;
        }

        let idx = self.next;
        self.goals[idx] = Some(p);
        self.next += 1;
        Ok(idx)
    }

    /// Set the terminal goal and hand back the complete list.
    pub fn finish(
        mut self,
        terminal: GridPoint,
        backfill: BackfillPolicy,
    ) -> Result<[GridPoint; GOAL_COUNT]> {
        let assigned = self.recorded();
        if assigned < FEATURE_GOALS {
            match backfill {
                BackfillPolicy::Reject => {
                    return Err(CourseError::UnderfilledGoals {
                        variant: self.variant,
                        assigned,
                        expected: FEATURE_GOALS,
                    });
                }
                BackfillPolicy::RepeatLast => {
                    log::warn!(
                        "{}: only {} of {} feature goals placed, repeating the last one",
                        self.variant,
                        assigned,
                        FEATURE_GOALS
                    );
                    let last = self.last();
                    for slot in &mut self.goals[self.next..=FEATURE_GOALS] {
                        *slot = Some(last);
                    }
                }
            }
        }

        let mut t = self.clip(terminal);
        t.x = t.x.max(self.last().x);
        self.goals[GOAL_COUNT - 1] = Some(t);

        let mut out = [GridPoint::default(); GOAL_COUNT];
        for (o, g) in out.iter_mut().zip(self.goals.iter()) {
            *o = g.unwrap_or(t);
        }
        Ok(out)
    }

    fn clip(&self, p: GridPoint) -> GridPoint {
        GridPoint {
            x: p.x.min(self.shape.0.saturating_sub(1)),
            y: p.y.min(self.shape.1.saturating_sub(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BackfillPolicy, FEATURE_GOALS, GOAL_COUNT, GoalSequencer, GridPoint};
    use crate::error::CourseError;

    fn seq() -> GoalSequencer {
        GoalSequencer::new("test", GridPoint::new(15, 20), (120, 40))
    }

    #[test]
    fn full_sequence_in_order() {
        let mut s = seq();
        for i in 0..FEATURE_GOALS {
            assert_eq!(s.record(GridPoint::new(25 + 10 * i, 20)).unwrap(), i + 1);
        }
        let goals = s
            .finish(GridPoint::new(105, 20), BackfillPolicy::Reject)
            .unwrap();
        assert_eq!(goals.len(), GOAL_COUNT);
        assert_eq!(goals[0], GridPoint::new(15, 20));
        assert_eq!(goals[6], GridPoint::new(75, 20));
        assert_eq!(goals[7], GridPoint::new(105, 20));
        assert!(goals.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn seventh_feature_goal_overflows() {
        let mut s = seq();
        for i in 0..FEATURE_GOALS {
            s.record(GridPoint::new(30 + i, 20)).unwrap();
        }
        assert!(matches!(
            s.record(GridPoint::new(90, 20)),
            Err(CourseError::GoalOverflow { capacity: FEATURE_GOALS, .. })
        ));
    }

    #[test]
    fn underfill_is_rejected_or_backfilled() {
        let mut s = seq();
        s.record(GridPoint::new(30, 12)).unwrap();
        s.record(GridPoint::new(40, 28)).unwrap();
        match s.clone().finish(GridPoint::new(100, 20), BackfillPolicy::Reject) {
            Err(CourseError::UnderfilledGoals { assigned, expected, .. }) => {
                assert_eq!((assigned, expected), (2, FEATURE_GOALS));
            }
            other => panic!("expected UnderfilledGoals, got {:?}", other),
        }

        let goals = s
            .finish(GridPoint::new(100, 20), BackfillPolicy::RepeatLast)
            .unwrap();
        for g in &goals[3..7] {
            assert_eq!(*g, GridPoint::new(40, 28));
        }
        assert_eq!(goals[7].x, 100);
    }

    #[test]
    fn goals_are_clipped_and_never_move_back() {
        let mut s = seq();
        s.record(GridPoint::new(50, 99)).unwrap();
        s.record(GridPoint::new(45, 3)).unwrap();
        s.record(GridPoint::new(500, 3)).unwrap();
        assert_eq!(s.last(), GridPoint::new(119, 3));

        let mut s = seq();
        s.record(GridPoint::new(50, 99)).unwrap();
        s.record(GridPoint::new(45, 3)).unwrap();
        let goals = s
            .finish(GridPoint::new(40, 20), BackfillPolicy::RepeatLast)
            .unwrap();
        assert_eq!(goals[1], GridPoint::new(50, 39));
        assert_eq!(goals[2], GridPoint::new(50, 3));
        assert_eq!(goals[7].x, 50);
    }

    #[test]
    fn metric_conversion_scales_by_resolution() {
        let (x, y) = GridPoint::new(15, 20).to_metric(0.1);
        assert!((x - 1.5).abs() < 1e-12);
        assert!((y - 2.0).abs() < 1e-12);
    }
}
