//! Tolawatch command line: configuration, logging and the entry points
//! for one-shot and watch-mode price cycles.

pub mod cli;
pub mod config;
pub mod main_lib;
pub mod scheduler;
