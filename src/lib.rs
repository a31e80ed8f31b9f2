pub mod app;
pub mod model;
pub mod ui;

pub use crate::app::App;
pub use crate::model::config::AppConfig;
