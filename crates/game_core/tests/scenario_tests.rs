//! End-to-end checks of the move engine and game state through the public API.

use game_core::{Direction, GameState, Grid, MergeMap, SlideMap};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn merge_pair_on_top_row_moving_left() {
    let grid = Grid::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let (after, out) = grid.shifted(Direction::Left);

    assert!(out.moved);
    assert_eq!(after.get(0, 0), 4);
    assert_eq!(out.score_delta, 4);
    assert_eq!(out.slides, SlideMap::from([((0, 0), (0, 0)), ((0, 1), (0, 0))]));
    assert_eq!(out.merges, MergeMap::from([((0, 0), 4)]));
    // The snapshot itself is untouched.
    assert_eq!(grid.get(0, 1), 2);
}

#[test]
fn merge_pair_in_first_column_moving_down() {
    let grid = Grid::from_rows(&[[0; 4], [0; 4], [2, 0, 0, 0], [2, 0, 0, 0]]).unwrap();
    let (after, out) = grid.shifted(Direction::Down);

    assert!(out.moved);
    assert_eq!(after.get(3, 0), 4);
    assert_eq!(out.slides, SlideMap::from([((2, 0), (3, 0)), ((3, 0), (3, 0))]));
}

#[test]
fn every_direction_mirrors_its_opposite() {
    let grid = Grid::from_rows(&[[2, 2, 4, 0], [0, 4, 4, 4], [8, 0, 8, 2], [2, 2, 2, 2]]).unwrap();
    for dir in [Direction::Left, Direction::Right] {
        let (a, out_a) = grid.shifted(dir);
        let (b, out_b) = grid.mirrored().shifted(dir.opposite());
        assert_eq!(a.mirrored(), b);
        assert_eq!(out_a.score_delta, out_b.score_delta);
        assert_eq!(out_a.merges.len(), out_b.merges.len());
    }
}

#[test]
fn seeded_games_are_reproducible() {
    let play = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new(4, &mut rng);
        for i in 0..200 {
            if game.is_terminal() {
                break;
            }
            game.apply_move(Direction::ALL[i % 4], &mut rng);
        }
        (game.grid().clone(), game.score())
    };
    assert_eq!(play(99), play(99));
}

#[test]
fn terminal_check_short_circuits_on_empty_cells() {
    let mut rng = StdRng::seed_from_u64(3);
    let game = GameState::new(4, &mut rng);
    assert!(game.grid().has_empty());
    assert!(!game.is_terminal());
}

#[test]
fn other_grid_sizes_work() {
    let grid = Grid::from_rows(&[[2, 2, 2, 2, 2], [0; 5], [0; 5], [0; 5], [0; 5]]).unwrap();
    let (after, out) = grid.shifted(Direction::Right);
    assert_eq!(after.rows()[0], vec![0, 0, 2, 4, 4]);
    assert_eq!(out.score_delta, 8);
}
