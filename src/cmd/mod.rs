//! Command module structure for the greet CLI

pub mod config;
pub mod greet;
pub mod ui;
pub mod util;
