use super::*;
use game_core::Solver;

use crate::MinMaxSolver;

fn grid(rows: &[[u32; 4]]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

/// Plain minimax without pruning, for comparison.
fn reference(grid: &Grid, depth: u8, maximizing: bool) -> i64 {
    if depth == 0 || grid.is_terminal() {
        return evaluate(grid);
    }
    if maximizing {
        let scores: Vec<i64> = Direction::ALL
            .into_iter()
            .map(|d| grid.shifted(d))
            .filter(|(_, out)| out.moved)
            .map(|(g, _)| reference(&g, depth - 1, false))
            .collect();
        scores.into_iter().max().unwrap_or_else(|| evaluate(grid))
    } else {
        let empty = grid.empty_cells();
        if empty.is_empty() {
            return evaluate(grid);
        }
        let mut worst = i64::MAX;
        for (r, c) in empty {
            for v in SPAWN_VALUES {
                let mut g = grid.clone();
                g.set(r, c, v);
                worst = worst.min(reference(&g, depth - 1, true));
            }
        }
        worst
    }
}

#[test]
fn depth_zero_is_static_evaluation() {
    let g = grid(&[[2, 4, 0, 0], [0, 8, 0, 0], [0, 0, 16, 0], [2, 0, 0, 0]]);
    let mut nodes = 0;
    assert_eq!(minimax(&g, 0, i64::MIN, i64::MAX, true, &mut nodes), evaluate(&g));
    assert_eq!(minimax(&g, 0, i64::MIN, i64::MAX, false, &mut nodes), evaluate(&g));
    assert_eq!(nodes, 0);
}

#[test]
fn terminal_grid_is_static_evaluation() {
    let g = grid(&[[2, 4, 8, 16], [32, 64, 128, 256], [512, 1024, 2048, 4096], [2, 4, 8, 16]]);
    let mut nodes = 0;
    assert_eq!(minimax(&g, 3, i64::MIN, i64::MAX, true, &mut nodes), evaluate(&g));
}

#[test]
fn pruning_matches_plain_minimax() {
    let grids = [
        grid(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]),
        grid(&[[2, 4, 8, 16], [4, 0, 0, 2], [0, 0, 2, 0], [0; 4]]),
        grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 0, 0]]),
    ];
    for g in &grids {
        for depth in 1..=3 {
            let mut nodes = 0;
            let pruned = minimax(g, depth, i64::MIN, i64::MAX, true, &mut nodes);
            assert_eq!(pruned, reference(g, depth, true), "depth {depth} grid {g:?}");
            let pruned = minimax(g, depth, i64::MIN, i64::MAX, false, &mut nodes);
            assert_eq!(pruned, reference(g, depth, false), "depth {depth} grid {g:?}");
        }
    }
}

#[test]
fn depth_one_picks_best_immediate_evaluation() {
    let g = grid(&[[2, 2, 4, 0], [0, 0, 0, 0], [0, 0, 4, 0], [0, 0, 0, 0]]);
    let mut expected: Option<(Direction, i64)> = None;
    for d in Direction::ALL {
        let (next, out) = g.shifted(d);
        if out.moved && expected.map_or(true, |(_, s)| evaluate(&next) > s) {
            expected = Some((d, evaluate(&next)));
        }
    }
    let mut nodes = 0;
    assert_eq!(pick_best_move(&g, 1, &mut nodes), expected);
}

#[test]
fn no_legal_move_returns_none() {
    let g = grid(&[[2, 4, 8, 16], [32, 64, 128, 256], [512, 1024, 2048, 4096], [2, 4, 8, 16]]);
    let mut nodes = 0;
    assert_eq!(pick_best_move(&g, 3, &mut nodes), None);

    let mut solver = MinMaxSolver::new();
    assert_eq!(solver.get_move(&g), None);
}

#[test]
fn solver_only_returns_legal_moves() {
    let g = grid(&[[2, 0, 0, 0], [4, 0, 0, 0], [8, 0, 0, 0], [16, 0, 0, 0]]);
    let mut solver = MinMaxSolver::with_depth(2);
    let result = solver.search(&g);
    let mv = result.best_move.unwrap();
    assert!(g.legal_moves().contains(&mv));
    assert!(result.nodes > 0);
}

#[test]
fn solver_does_not_mutate_snapshot() {
    let g = grid(&[[2, 2, 4, 4], [0, 2, 0, 2], [0; 4], [8, 0, 0, 8]]);
    let before = g.clone();
    MinMaxSolver::new().search(&g);
    assert_eq!(g, before);
}
