//! Employee DTOs, input validation and derived values.

use crate::entities::employees::{self, Gender};
use crate::error::{AppError, Result};
use chrono::{Datelike, Local, NaiveDate};
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// DTO for creating an employee.
///
/// Records coming from the command line go through [`NewEmployee::parse`],
/// which validates every field. The bulk generator builds this struct directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewEmployee {
    #[validate(custom = "validate_name")]
    pub last_name: String,
    #[validate(custom = "validate_name")]
    pub first_name: String,
    #[validate(custom = "validate_name")]
    pub middle_name: Option<String>,
    #[validate(custom = "validate_birth_date")]
    pub birth_date: NaiveDate,
    pub gender: Gender,
}

impl NewEmployee {
    /// Build a record from raw command-line input and validate it.
    ///
    /// Date and gender syntax errors fail fast; name and date range checks are
    /// collected and reported together.
    pub fn parse(
        last_name: &str,
        first_name: &str,
        middle_name: Option<&str>,
        birth_date: &str,
        gender: &str,
    ) -> Result<Self> {
        let birth_date = NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d")
            .map_err(|e| AppError::parse(format!("birth date '{birth_date}': {e} (expected YYYY-MM-DD)")))?;
        let gender: Gender = gender.parse().map_err(AppError::parse)?;

        let employee = Self {
            last_name: last_name.trim().to_string(),
            first_name: first_name.trim().to_string(),
            middle_name: middle_name.map(|m| m.trim().to_string()).filter(|m| !m.is_empty()),
            birth_date,
            gender,
        };
        employee.validate()?;
        Ok(employee)
    }

    /// Convert into an insertable active model; the id is assigned by the database.
    pub fn into_active_model(self) -> employees::ActiveModel {
        employees::ActiveModel {
            id: NotSet,
            last_name: Set(self.last_name),
            first_name: Set(self.first_name),
            middle_name: Set(self.middle_name),
            birth_date: Set(self.birth_date),
            gender: Set(self.gender),
        }
    }
}

impl employees::Model {
    /// "Last First Middle", skipping an absent middle name.
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.last_name, self.first_name, middle),
            None => format!("{} {}", self.last_name, self.first_name),
        }
    }

    /// Age in whole years as of `today`.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        age_on(self.birth_date, today)
    }
}

/// Whole years between `birth_date` and `today`.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years - 1
    } else {
        years
    }
}

/// `^[A-Z][a-z]+$`: one ASCII capital followed by at least one lowercase letter.
pub fn is_capitalized_word(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    let rest = chars.as_str();
    !rest.is_empty() && rest.chars().all(|c| c.is_ascii_lowercase())
}

fn validate_name(name: &str) -> std::result::Result<(), ValidationError> {
    if is_capitalized_word(name) {
        return Ok(());
    }
    let mut err = ValidationError::new("capitalized_word");
    err.message = Some(Cow::from(format!("'{name}' must be a capitalized Latin word")));
    Err(err)
}

fn validate_birth_date(date: &NaiveDate) -> std::result::Result<(), ValidationError> {
    if *date > Local::now().date_naive() {
        let mut err = ValidationError::new("future_date");
        err.message = Some(Cow::from(format!("{date} is in the future")));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_capitalized_word() {
        assert!(is_capitalized_word("Ivanov"));
        assert!(is_capitalized_word("Li"));

        assert!(!is_capitalized_word(""));
        assert!(!is_capitalized_word("I"));
        assert!(!is_capitalized_word("ivanov"));
        assert!(!is_capitalized_word("IVANOV"));
        assert!(!is_capitalized_word("Smith-Jones"));
        assert!(!is_capitalized_word("Van Dyke"));
        assert!(!is_capitalized_word("Müller"));
        assert!(!is_capitalized_word("Иванов"));
    }

    #[test]
    fn test_parse_valid() {
        let employee = NewEmployee::parse("Ivanov", "Petr", Some("Sergeevich"), "1990-05-17", "male").unwrap();
        assert_eq!(employee.last_name, "Ivanov");
        assert_eq!(employee.middle_name.as_deref(), Some("Sergeevich"));
        assert_eq!(employee.birth_date, date(1990, 5, 17));
        assert_eq!(employee.gender, Gender::Male);
    }

    #[test]
    fn test_parse_without_middle_name() {
        let employee = NewEmployee::parse("Smith", "Anna", None, "1985-01-01", "Female").unwrap();
        assert!(employee.middle_name.is_none());

        let blank = NewEmployee::parse("Smith", "Anna", Some("  "), "1985-01-01", "Female").unwrap();
        assert!(blank.middle_name.is_none());
    }

    #[test]
    fn test_parse_reports_all_bad_names() {
        let err = NewEmployee::parse("smith", "ANNA", Some("x"), "1985-01-01", "Female").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("last_name"), "{msg}");
        assert!(msg.contains("first_name"), "{msg}");
        assert!(msg.contains("middle_name"), "{msg}");
    }

    #[test]
    fn test_parse_bad_date() {
        assert!(matches!(
            NewEmployee::parse("Smith", "Anna", None, "1985-13-01", "Female"),
            Err(AppError::Parse(_))
        ));
        assert!(matches!(
            NewEmployee::parse("Smith", "Anna", None, "01.01.1985", "Female"),
            Err(AppError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_future_date() {
        let next_year = Local::now().date_naive().year() + 1;
        let result = NewEmployee::parse("Smith", "Anna", None, &format!("{next_year}-01-01"), "Female");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_parse_bad_gender() {
        assert!(matches!(
            NewEmployee::parse("Smith", "Anna", None, "1985-01-01", "Unknown"),
            Err(AppError::Parse(_))
        ));
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let birth = date(1990, 6, 15);
        assert_eq!(age_on(birth, date(2020, 6, 14)), 29);
        assert_eq!(age_on(birth, date(2020, 6, 15)), 30);
        assert_eq!(age_on(birth, date(2020, 12, 1)), 30);
        assert_eq!(age_on(birth, date(2021, 1, 1)), 30);
    }

    #[test]
    fn test_age_leap_day() {
        let birth = date(2000, 2, 29);
        assert_eq!(age_on(birth, date(2021, 2, 28)), 20);
        assert_eq!(age_on(birth, date(2021, 3, 1)), 21);
    }

    #[test]
    fn test_full_name() {
        let mut model = employees::Model {
            id: 1,
            last_name: "Ivanov".to_string(),
            first_name: "Petr".to_string(),
            middle_name: Some("Sergeevich".to_string()),
            birth_date: date(1990, 5, 17),
            gender: Gender::Male,
        };
        assert_eq!(model.full_name(), "Ivanov Petr Sergeevich");

        model.middle_name = None;
        assert_eq!(model.full_name(), "Ivanov Petr");
    }
}
