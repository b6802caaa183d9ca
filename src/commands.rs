//! Command handlers.

use crate::cli::{Command, GenerateArgs, QueryArgs};
use crate::config::{AppConfig, QueryConfig};
use crate::db::{self, employee, schema};
use crate::entities::employees::{self, Gender};
use crate::error::{AppError, Result};
use crate::generator::{Generator, NameSamples};
use crate::models::NewEmployee;
use crate::report;
use crate::seed::{SeedOptions, SeedService};
use chrono::{Local, NaiveDate};
use sea_orm::DatabaseConnection;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Run one command against the configured database.
pub async fn run(command: Command, config: &AppConfig, config_path: &Path) -> Result<()> {
    match command {
        Command::Config { save } => show_config(config, config_path, save),
        Command::Add(args) => {
            // Reject bad input before opening a connection.
            let employee = NewEmployee::parse(
                &args.last_name,
                &args.first_name,
                args.middle_name.as_deref(),
                &args.birth_date,
                &args.gender,
            )?;
            let conn = db::connect(&config.database).await?;
            add(&conn, employee).await
        }
        Command::Query(args) => {
            let prefix = query_prefix(&args, &config.query)?;
            let conn = db::connect(&config.database).await?;
            query(&conn, prefix, &args).await
        }
        Command::Generate(args) => {
            let conn = db::connect(&config.database).await?;
            generate(&conn, config, &args).await
        }
        Command::Init => {
            let conn = db::connect(&config.database).await?;
            schema::create_table(&conn).await?;
            Ok(())
        }
        Command::List => {
            let conn = db::connect(&config.database).await?;
            list(&conn).await
        }
        Command::Optimize => {
            let conn = db::connect(&config.database).await?;
            schema::optimize(&conn).await?;
            Ok(())
        }
        Command::Status => {
            let conn = db::connect(&config.database).await?;
            status(&conn).await
        }
    }
}

async fn add(conn: &DatabaseConnection, employee: NewEmployee) -> Result<()> {
    let stored = employee::insert_one(conn, employee).await?;
    info!("Inserted employee id={}", stored.id);
    println!("Added #{}: {}", stored.id, stored.full_name());
    Ok(())
}

async fn list(conn: &DatabaseConnection) -> Result<()> {
    let rows = employee::list_unique(conn).await?;
    println!("{}", report::listing(&rows, Local::now().date_naive()));
    Ok(())
}

async fn generate(conn: &DatabaseConnection, config: &AppConfig, args: &GenerateArgs) -> Result<()> {
    let settings = args.merge(&config.generator);
    let mut checked = config.clone();
    checked.generator = settings.clone();
    checked.validate().map_err(|e| AppError::config(e.to_string()))?;

    let marker_letter = config
        .query
        .prefix_letter()
        .ok_or_else(|| AppError::config("invalid last name prefix"))?;

    let samples = NameSamples::load(&settings.last_names, &settings.male_names, &settings.female_names).await?;
    let mut generator = Generator::new(&samples, args.seed)?;

    let options = SeedOptions {
        total: settings.total,
        batch_size: settings.batch_size,
        marker_rows: settings.marker_rows,
        marker_letter,
        truncate: args.truncate,
    };
    let result = SeedService::new(conn, options).run(&mut generator).await?;
    println!("{}", result.summary());
    Ok(())
}

fn query_prefix(args: &QueryArgs, config: &QueryConfig) -> Result<char> {
    let query = QueryConfig {
        last_name_prefix: args.prefix.clone().unwrap_or_else(|| config.last_name_prefix.clone()),
    };
    query.prefix_letter().ok_or_else(|| {
        AppError::validation(format!(
            "prefix '{}' must be a single uppercase letter",
            query.last_name_prefix
        ))
    })
}

async fn query(conn: &DatabaseConnection, prefix: char, args: &QueryArgs) -> Result<()> {
    let start = Instant::now();
    let rows = employee::find_by_gender_and_prefix(conn, Gender::Male, &prefix.to_string()).await?;
    let elapsed = start.elapsed();
    info!("Query matched {} rows in {:?}", rows.len(), elapsed);

    println!("{}", timed_report(&rows, args.limit, elapsed, Local::now().date_naive()));
    Ok(())
}

/// Report on at most `limit` rows; the count and timing still cover every match.
fn timed_report(rows: &[employees::Model], limit: Option<usize>, elapsed: Duration, today: NaiveDate) -> String {
    let shown = match limit {
        Some(limit) => &rows[..limit.min(rows.len())],
        None => rows,
    };
    report::timed_listing(shown, rows.len(), elapsed, today)
}

async fn status(conn: &DatabaseConnection) -> Result<()> {
    db::test_connection(conn).await?;
    let version = db::get_version(conn).await?;
    let counts = db::get_table_counts(conn).await?;
    println!("PostgreSQL: {version}");
    println!("Employees: {}", counts.employees);
    Ok(())
}

fn show_config(config: &AppConfig, path: &Path, save: bool) -> Result<()> {
    if save {
        config.save(path).map_err(|e| AppError::config(e.to_string()))?;
        info!("Config written to {:?}", path);
    }

    let mut shown = config.clone();
    if !shown.database.password.is_empty() {
        shown.database.password = "********".to_string();
    }
    let text = toml::to_string_pretty(&shown).map_err(|e| AppError::config(e.to_string()))?;
    println!("# {}\n{text}", path.display());
    Ok(())
}
