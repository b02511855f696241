//! Heuristic board evaluation shared by the search solvers and the tuner.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::types::EMPTY;

/// Default weights for the fixed evaluator: empty cells, monotonicity, smoothness.
pub const EMPTY_WEIGHT: i64 = 10;
pub const MONOTONICITY_WEIGHT: i64 = 20;
pub const SMOOTHNESS_WEIGHT: i64 = 5;

pub fn empty_cells(grid: &Grid) -> i64 {
    grid.count_empty() as i64
}

/// +1 for every adjacent pair (left-to-right and top-to-bottom) that is
/// non-decreasing, -1 otherwise. Empty cells count as 0.
pub fn monotonicity(grid: &Grid) -> i64 {
    let n = grid.size();
    let mut score = 0;
    for r in 0..n {
        for c in 0..n.saturating_sub(1) {
            score += if grid.get(r, c) <= grid.get(r, c + 1) { 1 } else { -1 };
        }
    }
    for r in 0..n.saturating_sub(1) {
        for c in 0..n {
            score += if grid.get(r, c) <= grid.get(r + 1, c) { 1 } else { -1 };
        }
    }
    score
}

/// Negative sum of absolute differences between adjacent non-empty cells.
pub fn smoothness(grid: &Grid) -> i64 {
    let n = grid.size();
    let mut score = 0i64;
    let mut pair = |a: u32, b: u32| {
        if a != EMPTY && b != EMPTY {
            score -= (a as i64 - b as i64).abs();
        }
    };
    for r in 0..n {
        for c in 0..n.saturating_sub(1) {
            pair(grid.get(r, c), grid.get(r, c + 1));
        }
    }
    for c in 0..n {
        for r in 0..n.saturating_sub(1) {
            pair(grid.get(r, c), grid.get(r + 1, c));
        }
    }
    score
}

/// Per row and per column, the larger of the non-decreasing and
/// non-increasing pair counts, summed over all lines.
pub fn directional_monotonicity(grid: &Grid) -> i64 {
    let n = grid.size();
    let line_score = |cell: &dyn Fn(usize) -> u32| {
        let (mut inc, mut dec) = (0i64, 0i64);
        for k in 0..n.saturating_sub(1) {
            let (a, b) = (cell(k), cell(k + 1));
            if a <= b {
                inc += 1;
            }
            if a >= b {
                dec += 1;
            }
        }
        inc.max(dec)
    };

    let mut score = 0;
    for r in 0..n {
        score += line_score(&|k| grid.get(r, k));
    }
    for c in 0..n {
        score += line_score(&|k| grid.get(k, c));
    }
    score
}

/// 1.0 when the largest tile sits in one of the four corners.
pub fn corner_bonus(grid: &Grid) -> f64 {
    let n = grid.size();
    if n == 0 {
        return 0.0;
    }
    let max = grid.max_tile();
    let corners = [
        grid.get(0, 0),
        grid.get(0, n - 1),
        grid.get(n - 1, 0),
        grid.get(n - 1, n - 1),
    ];
    if corners.contains(&max) {
        1.0
    } else {
        0.0
    }
}

/// Fixed-weight evaluation used by MinMax and Expectimax.
pub fn evaluate(grid: &Grid) -> i64 {
    empty_cells(grid) * EMPTY_WEIGHT
        + monotonicity(grid) * MONOTONICITY_WEIGHT
        + smoothness(grid) * SMOOTHNESS_WEIGHT
}

/// Weight vector tuned by the genetic search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    pub empty: f64,
    pub monotonicity: f64,
    pub smoothness: f64,
    pub corner: f64,
    pub max_tile: f64,
}

impl HeuristicWeights {
    pub const LEN: usize = 5;
    pub const LABELS: [&'static str; Self::LEN] = ["Empty", "Mono", "Smooth", "Corner", "MaxTile"];

    pub fn to_array(self) -> [f64; Self::LEN] {
        [
            self.empty,
            self.monotonicity,
            self.smoothness,
            self.corner,
            self.max_tile,
        ]
    }

    pub fn from_array(genes: [f64; Self::LEN]) -> Self {
        Self {
            empty: genes[0],
            monotonicity: genes[1],
            smoothness: genes[2],
            corner: genes[3],
            max_tile: genes[4],
        }
    }
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            empty: EMPTY_WEIGHT as f64,
            monotonicity: MONOTONICITY_WEIGHT as f64,
            smoothness: SMOOTHNESS_WEIGHT as f64,
            corner: 0.0,
            max_tile: 0.0,
        }
    }
}

impl fmt::Display for HeuristicWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, w)) in Self::LABELS.iter().zip(self.to_array()).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{label}={w:.1}")?;
        }
        Ok(())
    }
}

/// Weighted evaluation used by the tuner's greedy player.
pub fn evaluate_weighted(grid: &Grid, weights: &HeuristicWeights) -> f64 {
    empty_cells(grid) as f64 * weights.empty
        + directional_monotonicity(grid) as f64 * weights.monotonicity
        + smoothness(grid) as f64 * weights.smoothness
        + corner_bonus(grid) * weights.corner
        + grid.max_tile() as f64 * weights.max_tile
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
