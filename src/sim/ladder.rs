//! Ladder graph and its random generator
//!
//! A ladder is `row_count` rows of rungs over `lane_count` vertical lanes.
//! Each rung joins two adjacent lanes, no lane is touched by two rungs in the
//! same row, and the last row is always empty.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{MIN_LANES, ROW_COUNT, RUNG_PROBABILITY};
use crate::error::{LadderError, Result};

/// A horizontal connector between lane `from` and lane `to = from + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RungConnection {
    pub from: usize,
    pub to: usize,
}

impl RungConnection {
    /// Rung between `lane` and the lane to its right
    pub const fn right_of(lane: usize) -> Self {
        Self {
            from: lane,
            to: lane + 1,
        }
    }

    #[inline]
    pub fn touches(&self, lane: usize) -> bool {
        self.from == lane || self.to == lane
    }

    /// The endpoint opposite `lane` (only meaningful if the rung touches it)
    #[inline]
    pub fn other_end(&self, lane: usize) -> usize {
        if self.from == lane { self.to } else { self.from }
    }
}

/// Abstract ladder structure (immutable once built)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderGraph {
    lane_count: usize,
    /// One entry per row, rungs sorted by `from`
    rows: Vec<Vec<RungConnection>>,
}

impl LadderGraph {
    /// Generate a ladder with the reference row count
    pub fn generate<R: Rng + ?Sized>(lane_count: usize, rng: &mut R) -> Result<Self> {
        Self::generate_with_rows(lane_count, ROW_COUNT, rng)
    }

    /// Generate a ladder with an explicit row count.
    ///
    /// Each row is filled by a left-to-right scan over adjacent lane pairs.
    /// A pair gets a rung on a coin flip, but only if neither lane already
    /// has one in this row.
    pub fn generate_with_rows<R: Rng + ?Sized>(
        lane_count: usize,
        row_count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if lane_count < MIN_LANES {
            return Err(LadderError::TooFewLanes {
                lane_count,
                min: MIN_LANES,
            });
        }
        if row_count == 0 {
            return Err(LadderError::NoRows);
        }

        let mut rows = Vec::with_capacity(row_count);
        for row in 0..row_count {
            let mut rungs = Vec::new();

            // Last row stays empty
            if row + 1 < row_count {
                let mut used = BTreeSet::new();
                for col in 0..lane_count - 1 {
                    if !used.contains(&col)
                        && !used.contains(&(col + 1))
                        && rng.random_bool(RUNG_PROBABILITY)
                    {
                        rungs.push(RungConnection::right_of(col));
                        used.insert(col);
                        used.insert(col + 1);
                    }
                }
            }
            rows.push(rungs);
        }

        let graph = Self { lane_count, rows };
        log::debug!(
            "Generated ladder: {} lanes, {} rows, {} rungs",
            lane_count,
            row_count,
            graph.rung_count()
        );
        Ok(graph)
    }

    /// Build a ladder from explicit rows, checking every structural invariant
    pub fn from_rows(lane_count: usize, rows: Vec<Vec<RungConnection>>) -> Result<Self> {
        let mut graph = Self { lane_count, rows };
        for row in &mut graph.rows {
            row.sort();
        }
        graph.validate()?;
        Ok(graph)
    }

    /// Check the structural invariants (needed for deserialized graphs)
    pub fn validate(&self) -> Result<()> {
        if self.lane_count < MIN_LANES {
            return Err(LadderError::TooFewLanes {
                lane_count: self.lane_count,
                min: MIN_LANES,
            });
        }
        if self.rows.is_empty() {
            return Err(LadderError::NoRows);
        }

        for (row, rungs) in self.rows.iter().enumerate() {
            let mut used = BTreeSet::new();
            for rung in rungs {
                if rung.from.checked_add(1) != Some(rung.to) || rung.to >= self.lane_count {
                    return Err(LadderError::InvalidRung {
                        row,
                        from: rung.from,
                        to: rung.to,
                        lane_count: self.lane_count,
                    });
                }
                for lane in [rung.from, rung.to] {
                    if !used.insert(lane) {
                        return Err(LadderError::LaneReused { row, lane });
                    }
                }
            }
        }

        let last = self.rows.len() - 1;
        if !self.rows[last].is_empty() {
            return Err(LadderError::TerminalRowNotEmpty { row: last });
        }
        Ok(())
    }

    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rungs of one row, ordered left to right
    pub fn row(&self, row: usize) -> &[RungConnection] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[RungConnection]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn rung_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// The rung in `row` touching `lane`, if any
    pub fn rung_at(&self, row: usize, lane: usize) -> Option<RungConnection> {
        self.row(row).iter().copied().find(|rung| rung.touches(lane))
    }

    /// Lane after passing through `row` starting on `lane`
    #[inline]
    pub fn step(&self, row: usize, lane: usize) -> usize {
        match self.rung_at(row, lane) {
            Some(rung) => rung.other_end(lane),
            None => lane,
        }
    }

    pub fn check_lane(&self, lane: usize) -> Result<()> {
        if lane < self.lane_count {
            Ok(())
        } else {
            Err(LadderError::LaneOutOfRange {
                lane,
                lane_count: self.lane_count,
            })
        }
    }

    /// Terminal lane for `start`, without any geometry
    pub fn destination(&self, start: usize) -> Result<usize> {
        self.check_lane(start)?;
        Ok((0..self.row_count()).fold(start, |lane, row| self.step(row, lane)))
    }

    /// Terminal lane of every start lane, indexed by start lane
    pub fn mapping(&self) -> Vec<usize> {
        let mut lanes: Vec<usize> = (0..self.lane_count).collect();
        for row in 0..self.row_count() {
            for lane in &mut lanes {
                *lane = self.step(row, *lane);
            }
        }
        lanes
    }
}
