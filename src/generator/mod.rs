//! Synthetic employee generator.
//!
//! Name samples are bucketed by first letter and shuffled once. Records then
//! walk the alphabet of last-name letters round-robin, alternating gender on
//! every full pass, so both letters and genders are evenly spread over the
//! output. First and middle names are taken from the gendered bucket with the
//! same letter as the last name where one exists.

mod bucket;
mod samples;


pub use bucket::{Bucket, Buckets};
pub use samples::{NameSamples, load_names, parse_names};

use crate::entities::employees::Gender;
use crate::error::{AppError, Result};
use crate::models::NewEmployee;
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generated birth dates fall in `1950-01-01..=2005-12-31`.
pub const BIRTH_YEARS: (i32, i32) = (1950, 2005);

/// Endless, deterministic-per-seed stream of synthetic employees.
pub struct Generator<R: Rng = StdRng> {
    last_names: Buckets,
    male_names: Buckets,
    female_names: Buckets,
    letters: Vec<char>,
    index: u64,
    rng: R,
}

impl Generator<StdRng> {
    /// Build a generator seeded with `seed`, or from OS entropy when `None`.
    pub fn new(samples: &NameSamples, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(samples, rng)
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(samples: &NameSamples, mut rng: R) -> Result<Self> {
        let last_names = Buckets::build(&samples.last_names, &mut rng);
        let male_names = Buckets::build(&samples.male_names, &mut rng);
        let female_names = Buckets::build(&samples.female_names, &mut rng);

        if last_names.is_empty() {
            return Err(AppError::samples("no last names to generate from"));
        }
        if male_names.is_empty() || female_names.is_empty() {
            return Err(AppError::samples("both male and female first names are required"));
        }

        let letters = last_names.letters();
        tracing::debug!("Generator alphabet: {}", letters.iter().collect::<String>());

        Ok(Self {
            last_names,
            male_names,
            female_names,
            letters,
            index: 0,
            rng,
        })
    }

    /// Last-name letters in the order the generator cycles through them.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of records produced so far (marker records excluded).
    pub fn produced(&self) -> u64 {
        self.index
    }

    /// Letter and gender of the next record in the round-robin sequence.
    fn next_slot(&mut self) -> (char, Gender) {
        let n = self.letters.len() as u64;
        let letter = self.letters[(self.index % n) as usize];
        let gender = if (self.index / n) % 2 == 0 {
            Gender::Male
        } else {
            Gender::Female
        };
        self.index += 1;
        (letter, gender)
    }

    /// `count` male records whose last names start with `letter`.
    ///
    /// Fails without producing anything when no last name starts with `letter`.
    pub fn markers(&mut self, letter: char, count: usize) -> Result<Vec<NewEmployee>> {
        if count > 0 && self.last_names.get(letter).is_none() {
            return Err(AppError::samples(format!("no last names start with '{letter}'")));
        }
        Ok((0..count)
            .filter_map(|_| self.record_for(letter, Gender::Male))
            .collect())
    }

    /// One record with a last name from `letter`'s bucket, `None` if that bucket is missing.
    fn record_for(&mut self, letter: char, gender: Gender) -> Option<NewEmployee> {
        let last_name = self.last_names.get_mut(letter)?.next_first().to_string();

        let first_names = match gender {
            Gender::Male => &mut self.male_names,
            Gender::Female => &mut self.female_names,
        };
        let bucket = first_names.nearest_mut(letter)?;
        let first_name = bucket.next_first().to_string();
        let middle_name = bucket.next_middle().to_string();

        let birth_date = random_birth_date(&mut self.rng);

        Some(NewEmployee {
            last_name,
            first_name,
            middle_name: Some(middle_name),
            birth_date,
            gender,
        })
    }
}

impl<R: Rng> Iterator for Generator<R> {
    type Item = NewEmployee;

    /// Never ends on its own; `letters` holds exactly the keys of the
    /// last-name buckets, so every slot yields a record.
    fn next(&mut self) -> Option<Self::Item> {
        let (letter, gender) = self.next_slot();
        self.record_for(letter, gender)
    }
}

/// First and last possible generated birth dates.
pub fn birth_date_bounds() -> (NaiveDate, NaiveDate) {
    let (from, to) = BIRTH_YEARS;
    (
        NaiveDate::from_ymd_opt(from, 1, 1).unwrap_or_default(),
        NaiveDate::from_ymd_opt(to, 12, 31).unwrap_or_default(),
    )
}

/// Uniform date within [`birth_date_bounds`].
pub fn random_birth_date<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
    let (min, max) = birth_date_bounds();
    let span = (max - min).num_days() as u64;
    let offset = rng.random_range(0..=span);
    min.checked_add_days(Days::new(offset)).unwrap_or(min)
}
