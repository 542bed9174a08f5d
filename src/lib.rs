//! gridsheet - menu-driven grid and record utilities built on `gridsheet-core`
//! and `gridsheet-query`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
