//! Connectivity-test input preparation CLI.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
