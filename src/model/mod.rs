pub use lifeboard_core::RuleLogic;
pub mod config {
    pub use lifeboard_core::config::*;
}
pub mod error {
    pub use lifeboard_core::error::*;
}
pub mod grid {
    pub use lifeboard_core::grid::*;
}
pub mod history {
    pub use lifeboard_core::history::*;
}
pub mod metrics {
    pub use lifeboard_core::metrics::*;
}
pub mod neighbors {
    pub use lifeboard_core::neighbors::*;
}
pub mod rules {
    pub use lifeboard_core::rules::*;
}
pub mod simulation {
    pub use lifeboard_core::simulation::*;
}

pub mod state {
    pub use lifeboard_data::*;
}
