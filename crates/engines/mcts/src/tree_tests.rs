use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn grid(rows: &[[u32; 4]]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(11)
}

fn start() -> Grid {
    grid(&[[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]])
}

fn terminal() -> Grid {
    grid(&[[2, 4, 8, 16], [32, 64, 128, 256], [512, 1024, 2048, 4096], [2, 4, 8, 16]])
}

#[test]
fn root_starts_unexpanded() {
    let tree = Tree::new(start());
    let root = tree.get(ROOT);
    assert_eq!(tree.len(), 1);
    assert!(root.parent.is_none());
    assert!(root.mv.is_none());
    assert_eq!(root.visits, 0);
    assert_eq!(root.total_reward, 0.0);
    assert!(root.children.is_empty());
    assert_eq!(root.untried.len(), 4);
    assert!(!root.is_fully_expanded());
}

#[test]
fn node_terminal_follows_grid() {
    assert!(!Tree::new(Grid::new(4)).get(ROOT).is_terminal());
    assert!(Tree::new(terminal()).get(ROOT).is_terminal());
}

#[test]
fn select_prefers_unvisited_child() {
    let mut tree = Tree::new(start());
    let a = tree.expand(ROOT, &mut rng()).unwrap();
    let b = tree.expand(ROOT, &mut rng()).unwrap();
    tree.get_mut(ROOT).visits = 10;
    tree.get_mut(a).visits = 5;
    tree.get_mut(a).total_reward = 3.0;
    assert_eq!(tree.select_child(ROOT, 1.414), Some(b));
}

#[test]
fn select_uses_ucb1() {
    let mut tree = Tree::new(start());
    let a = tree.expand(ROOT, &mut rng()).unwrap();
    let b = tree.expand(ROOT, &mut rng()).unwrap();
    tree.get_mut(ROOT).visits = 100;
    // a: 0.9 + 1.414 * sqrt(ln 100 / 50) ~= 1.33
    tree.get_mut(a).visits = 50;
    tree.get_mut(a).total_reward = 45.0;
    // b: 0.7 + 1.414 * sqrt(ln 100 / 10) ~= 1.66
    tree.get_mut(b).visits = 10;
    tree.get_mut(b).total_reward = 7.0;
    assert_eq!(tree.select_child(ROOT, 1.414), Some(b));
    // Without exploration the higher win rate wins.
    assert_eq!(tree.select_child(ROOT, 0.0), Some(a));
}

#[test]
fn expand_adds_child_with_one_spawned_tile() {
    let mut tree = Tree::new(grid(&[[0; 4], [0, 0, 2, 0], [0; 4], [0; 4]]));
    let child = tree.expand(ROOT, &mut rng()).unwrap();

    assert_eq!(tree.get(ROOT).children, vec![child]);
    assert_eq!(tree.get(ROOT).untried.len(), 3);
    let node = tree.get(child);
    assert_eq!(node.parent, Some(ROOT));
    let mv = node.mv.unwrap();
    let (moved, _) = tree.get(ROOT).grid.shifted(mv);
    assert_eq!(node.grid.count_empty(), moved.count_empty() - 1);
}

#[test]
fn expand_skips_no_op_directions() {
    // Only RIGHT and DOWN move this grid.
    let mut tree = Tree::new(grid(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]));
    let mut rng = rng();
    let mut moves = Vec::new();
    while let Some(child) = tree.expand(ROOT, &mut rng) {
        moves.push(tree.get(child).mv.unwrap());
    }
    moves.sort();
    assert_eq!(moves, vec![Direction::Right, Direction::Down]);
    assert!(tree.get(ROOT).is_fully_expanded());
}

#[test]
fn expand_on_terminal_grid_yields_nothing() {
    let mut tree = Tree::new(terminal());
    assert_eq!(tree.expand(ROOT, &mut rng()), None);
    assert!(tree.get(ROOT).children.is_empty());
}

#[test]
fn backpropagation_reaches_root() {
    let mut tree = Tree::new(start());
    let mut rng = rng();
    let child = tree.expand(ROOT, &mut rng).unwrap();
    let grandchild = tree.expand(child, &mut rng).unwrap();

    tree.backpropagate(grandchild, 0.25);
    tree.backpropagate(child, 0.5);

    assert_eq!(tree.get(grandchild).visits, 1);
    assert_eq!(tree.get(child).visits, 2);
    assert_eq!(tree.get(ROOT).visits, 2);
    assert!((tree.get(ROOT).total_reward - 0.75).abs() < 1e-12);
    assert!((tree.get(child).win_rate() - 0.375).abs() < 1e-12);
}

#[test]
fn most_visited_child_wins() {
    let mut tree = Tree::new(start());
    let mut rng = rng();
    let a = tree.expand(ROOT, &mut rng).unwrap();
    let b = tree.expand(ROOT, &mut rng).unwrap();
    tree.get_mut(a).visits = 3;
    tree.get_mut(a).total_reward = 9.0;
    tree.get_mut(b).visits = 7;
    tree.get_mut(b).total_reward = 0.1;
    assert_eq!(tree.most_visited_child(), Some(b));
    assert_eq!(Tree::new(start()).most_visited_child(), None);
}

#[test]
fn simulation_from_terminal_scores_zero() {
    assert_eq!(simulate(&terminal(), 1000, &mut rng()), 0.0);
}

#[test]
fn simulation_respects_move_cap() {
    assert_eq!(simulate(&start(), 0, &mut rng()), 0.0);
    let reward = simulate(&start(), 1000, &mut rng());
    assert!(reward > 0.0);
    assert!(reward < 1.0);
}
