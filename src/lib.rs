pub mod cli;
pub mod config;
pub mod logging;
pub mod reveal;
pub mod service;
pub mod ui;
