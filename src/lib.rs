pub mod config;
pub mod controllers;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod tui;
