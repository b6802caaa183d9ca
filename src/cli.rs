//! Command-line interface definition.

use crate::config::{AppConfig, GeneratorConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Provision, fill and query the employees table.
#[derive(Parser, Debug)]
#[command(name = "employee-registry", version)]
pub struct Cli {
    /// Path to config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Use config.toml from current directory (dev mode)
    #[arg(long, global = true)]
    pub dev: bool,

    /// Enable debug logging (includes SQL statements)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the schema and the employees table
    Init,
    /// Validate and insert one employee
    Add(AddArgs),
    /// List employees unique by full name and birth date, with age
    List,
    /// Bulk-insert synthetic employees
    Generate(GenerateArgs),
    /// Timed listing of male employees by last name prefix
    Query(QueryArgs),
    /// Create the index used by `query`
    Optimize,
    /// Show server version and row count
    Status,
    /// Print the effective configuration
    Config {
        /// Write it to the config path
        #[arg(long)]
        save: bool,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    pub last_name: String,
    pub first_name: String,
    /// Birth date as YYYY-MM-DD
    pub birth_date: String,
    /// Male or Female
    pub gender: String,
    #[arg(long, short)]
    pub middle_name: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Number of records to generate
    #[arg(long)]
    pub total: Option<u64>,
    /// Records per INSERT statement
    #[arg(long)]
    pub batch_size: Option<usize>,
    #[arg(long)]
    pub last_names: Option<PathBuf>,
    #[arg(long)]
    pub male_names: Option<PathBuf>,
    #[arg(long)]
    pub female_names: Option<PathBuf>,
    /// Extra male rows with the query prefix letter
    #[arg(long)]
    pub marker_rows: Option<usize>,
    /// RNG seed for a reproducible data set
    #[arg(long)]
    pub seed: Option<u64>,
    /// Empty the table first
    #[arg(long)]
    pub truncate: bool,
}

#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Last name first letter (defaults to the configured prefix)
    #[arg(long)]
    pub prefix: Option<String>,
    /// Print at most this many rows; the count and timing cover all matches
    #[arg(long)]
    pub limit: Option<usize>,
}

impl Cli {
    /// `--config`, then `./config.toml` in dev mode, then the platform default.
    pub fn config_path(&self) -> PathBuf {
        match (&self.config, self.dev) {
            (Some(path), _) => path.clone(),
            (None, true) => PathBuf::from("config.toml"),
            (None, false) => AppConfig::default_path(),
        }
    }
}

impl GenerateArgs {
    /// Config values overridden by whatever was given on the command line.
    pub fn merge(&self, base: &GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            total: self.total.unwrap_or(base.total),
            batch_size: self.batch_size.unwrap_or(base.batch_size),
            marker_rows: self.marker_rows.unwrap_or(base.marker_rows),
            last_names: self.last_names.clone().unwrap_or_else(|| base.last_names.clone()),
            male_names: self.male_names.clone().unwrap_or_else(|| base.male_names.clone()),
            female_names: self.female_names.clone().unwrap_or_else(|| base.female_names.clone()),
        }
    }
}
