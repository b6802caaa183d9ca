pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod generator;
pub mod logging;
pub mod models;
pub mod report;
pub mod seed;

pub use error::{AppError, Result};
