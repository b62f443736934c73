//! pianocalc: a terminal calculator keypad that plays a piano note for every key.
//!
//! [`calc`] holds the calculator itself and has no terminal dependencies; the
//! remaining modules make up the TUI shell around it.

pub mod app;
pub mod calc;
pub mod config;
pub mod logging;
pub mod sound;
pub mod ui;
