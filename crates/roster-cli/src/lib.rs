//! Command-line front end for the employee roster.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
