pub mod api;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod platform;
pub mod session;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
