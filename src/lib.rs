pub mod cli;
pub mod commands;
pub mod config;
pub mod monitors;
pub mod schemas;
pub mod setup;
pub mod shared;
pub mod templates;
