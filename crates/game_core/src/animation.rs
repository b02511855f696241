//! Animation data derived from a move.
//!
//! A move animates in two phases: every tile slides from its origin to its
//! destination, then every merge destination pops. Solvers never look at this.

use crate::grid::Grid;
use crate::render::TileRenderer;
use crate::types::{Cell, Coords, MoveOutcome, EMPTY};

pub const SLIDE_DURATION_MS: f32 = 150.0;
pub const POP_DURATION_MS: f32 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub start: Coords,
    pub end: Coords,
    /// Value of the tile before the move.
    pub value: Cell,
}

impl Slide {
    /// Interpolated centre at `progress` in [0, 1].
    pub fn position<R: TileRenderer + ?Sized>(&self, renderer: &R, progress: f32) -> (f32, f32) {
        let t = progress.clamp(0.0, 1.0);
        let (x0, y0) = renderer.cell_center(self.start.1, self.start.0);
        let (x1, y1) = renderer.cell_center(self.end.1, self.end.0);
        (x0 + (x1 - x0) * t, y0 + (y1 - y0) * t)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pop {
    pub at: Coords,
    pub value: Cell,
}

impl Pop {
    /// Scale curve: grows to 1.2x at the midpoint, back to 1.0 at the end.
    pub fn scale(progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        1.0 + 0.2 * (1.0 - (2.0 * t - 1.0).abs())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationPlan {
    pub slides: Vec<Slide>,
    pub pops: Vec<Pop>,
}

impl AnimationPlan {
    /// Builds the plan from the grid as it was before the move.
    pub fn from_move(pre_move: &Grid, outcome: &MoveOutcome) -> Self {
        let slides = outcome
            .slides
            .iter()
            .filter_map(|(&start, &end)| {
                let value = pre_move.get(start.0, start.1);
                (value != EMPTY).then_some(Slide { start, end, value })
            })
            .collect();
        let pops = outcome
            .merges
            .iter()
            .map(|(&at, &value)| Pop { at, value })
            .collect();
        Self { slides, pops }
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty() && self.pops.is_empty()
    }

    /// Draws the slide phase at `elapsed_ms`.
    pub fn draw_slides<R: TileRenderer + ?Sized>(&self, renderer: &mut R, elapsed_ms: f32) {
        let progress = elapsed_ms / SLIDE_DURATION_MS;
        for slide in &self.slides {
            let center = slide.position(renderer, progress);
            renderer.draw_tile(slide.value, center, 1.0);
        }
    }

    /// Draws the pop phase at `elapsed_ms` (measured from the end of slides).
    pub fn draw_pops<R: TileRenderer + ?Sized>(&self, renderer: &mut R, elapsed_ms: f32) {
        let scale = Pop::scale(elapsed_ms / POP_DURATION_MS);
        for pop in &self.pops {
            let center = renderer.cell_center(pop.at.1, pop.at.0);
            renderer.draw_tile(pop.value, center, scale);
        }
    }
}
