//! Bulk fill orchestration.

use crate::db::{employee, schema};
use crate::error::Result;
use crate::generator::Generator;
use crate::models::NewEmployee;
use rand::Rng;
use sea_orm::ConnectionTrait;
use tracing::info;

/// Batches between two progress log lines.
const PROGRESS_EVERY: u64 = 100;

/// Parameters of one bulk fill.
#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub total: u64,
    pub batch_size: usize,
    pub marker_rows: usize,
    pub marker_letter: char,
    pub truncate: bool,
}

/// Result of a bulk fill.
#[derive(Debug, Clone)]
pub struct SeedResult {
    pub generated: u64,
    pub inserted: u64,
    pub markers: u64,
    pub batches: u64,
    pub duration_secs: f64,
}

impl SeedResult {
    /// Get summary message.
    pub fn summary(&self) -> String {
        let base = format!(
            "Generated: {}, Inserted: {} in {} batches (took {:.1}s)",
            self.generated, self.inserted, self.batches, self.duration_secs
        );
        if self.markers > 0 {
            format!("{base} - {} marker rows", self.markers)
        } else {
            base
        }
    }
}

/// Drives a [`Generator`] into the database in fixed-size batches.
pub struct SeedService<'a, C> {
    db: &'a C,
    options: SeedOptions,
}

impl<'a, C: ConnectionTrait> SeedService<'a, C> {
    pub fn new(db: &'a C, options: SeedOptions) -> Self {
        Self { db, options }
    }

    /// Run the fill: optional truncate, `total` generated rows, then marker rows.
    pub async fn run<R: Rng>(&self, generator: &mut Generator<R>) -> Result<SeedResult> {
        let start = std::time::Instant::now();
        let opts = &self.options;

        // Fail on a missing marker letter before anything is written.
        let markers = generator.markers(opts.marker_letter, opts.marker_rows)?;

        if opts.truncate {
            schema::truncate(self.db).await?;
        }

        info!(
            "Generating {} employees in batches of {}",
            opts.total, opts.batch_size
        );

        let mut generated = 0u64;
        let mut inserted = 0u64;
        let mut batches = 0u64;
        let mut batch: Vec<NewEmployee> = Vec::with_capacity(opts.batch_size);

        while generated < opts.total {
            let want = (opts.total - generated).min(opts.batch_size as u64) as usize;
            batch.clear();
            batch.extend(generator.by_ref().take(want));
            if batch.is_empty() {
                break;
            }

            generated += batch.len() as u64;
            inserted += employee::insert_batch(self.db, &batch).await?;
            batches += 1;

            if batches % PROGRESS_EVERY == 0 {
                info!("Progress: {generated}/{} rows", opts.total);
            }
        }

        let marker_count = if markers.is_empty() {
            0
        } else {
            let written = employee::insert_batch(self.db, &markers).await?;
            batches += 1;
            info!("Inserted {written} marker rows with last names starting with '{}'", opts.marker_letter);
            written
        };

        let duration_secs = start.elapsed().as_secs_f64();
        info!("Bulk fill complete: {generated} generated, {inserted} inserted");

        Ok(SeedResult {
            generated,
            inserted: inserted + marker_count,
            markers: marker_count,
            batches,
            duration_secs,
        })
    }
}
