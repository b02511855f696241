use game_core::{SearchResult, Solver};

/// Placeholder for a person at the keyboard.
///
/// Moves come from the front end's input handling, so `search` never
/// proposes one. A headless runner driving this solver stops immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanSolver;

impl HumanSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Solver for HumanSolver {
    fn search(&mut self, _grid: &game_core::Grid) -> SearchResult {
        SearchResult::none()
    }

    fn name(&self) -> &str {
        "human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Grid;

    #[test]
    fn never_offers_a_move() {
        let grid = Grid::from_rows(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut human = HumanSolver::new();
        assert_eq!(human.get_move(&grid), None);
        assert_eq!(human.name(), "human");
    }
}
