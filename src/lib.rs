pub mod app;
pub mod config;
pub mod logging;
pub mod model;
pub mod ui;
pub mod util;
