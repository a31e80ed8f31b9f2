use lifeboard_core::grid::Grid;

/// Plain-text board output, one character per cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardRenderer;

impl BoardRenderer {
    pub fn new() -> Self {
        Self
    }

    /// The board followed by a blank line.
    pub fn render_board(&self, grid: &Grid) -> String {
        format!("{grid}\n")
    }

    /// Header and board for one generation.
    pub fn render_generation(&self, iteration: u64, grid: &Grid) -> String {
        format!("\niteration {iteration}\n{}", self.render_board(grid))
    }
}
