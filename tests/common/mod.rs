use lifeboard_lib::model::grid::Grid;
use lifeboard_lib::model::history::DEFAULT_HISTORY_CAPACITY;
use lifeboard_lib::model::simulation::Simulation;
use lifeboard_lib::model::state::RuleParameters;

#[allow(dead_code)]
pub struct SimulationBuilder {
    side: usize,
    live: Vec<(usize, usize)>,
    rules: RuleParameters,
    history_capacity: usize,
}

#[allow(dead_code)]
impl SimulationBuilder {
    pub fn new(side: usize) -> Self {
        Self {
            side,
            live: Vec::new(),
            rules: RuleParameters::conway(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    pub fn with_cell(mut self, row: usize, col: usize) -> Self {
        self.live.push((row, col));
        self
    }

    pub fn with_cells(mut self, cells: &[(usize, usize)]) -> Self {
        self.live.extend_from_slice(cells);
        self
    }

    pub fn with_rules(mut self, rules: RuleParameters) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn grid(&self) -> Grid {
        Grid::with_live_cells(self.side, &self.live).expect("pattern fits the board")
    }

    pub fn build(self) -> Simulation {
        let grid = self.grid();
        Simulation::from_grid(grid, self.rules, self.history_capacity)
            .expect("Failed to create simulation")
    }
}

/// Vertical blinker centred on a 5x5 board.
#[allow(dead_code)]
pub const BLINKER: [(usize, usize); 3] = [(1, 2), (2, 2), (3, 2)];

/// 2x2 still life in the top-left corner.
#[allow(dead_code)]
pub const BLOCK: [(usize, usize); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

/// Toad, a period-2 oscillator, on a 6x6 board.
#[allow(dead_code)]
pub const TOAD: [(usize, usize); 6] = [(2, 2), (2, 3), (2, 4), (3, 1), (3, 2), (3, 3)];

/// Glider heading down and right.
#[allow(dead_code)]
pub const GLIDER: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
