//! Plain-text rendering of listings for the terminal.

use crate::entities::employees;
use chrono::NaiveDate;
use std::fmt::Write;
use std::time::Duration;

const NAME_WIDTH: usize = 40;

/// Column header matching [`employee_line`].
pub fn header() -> String {
    format!("{:<NAME_WIDTH$} {:<10} {:<6} {:>3}", "Full name", "Birth date", "Gender", "Age")
}

/// One aligned row: full name, birth date, gender, age as of `today`.
pub fn employee_line(employee: &employees::Model, today: NaiveDate) -> String {
    format!(
        "{:<NAME_WIDTH$} {} {:<6} {:>3}",
        employee.full_name(),
        employee.birth_date.format("%Y-%m-%d"),
        employee.gender,
        employee.age_on(today)
    )
}

/// Table of employees with a count footer.
pub fn listing(employees: &[employees::Model], today: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", header());
    for employee in employees {
        let _ = writeln!(out, "{}", employee_line(employee, today));
    }
    let _ = write!(out, "{} record(s)", employees.len());
    out
}

/// Listing followed by how long the query took.
pub fn timed_listing(employees: &[employees::Model], total: usize, elapsed: Duration, today: NaiveDate) -> String {
    let mut out = listing(employees, today);
    if total > employees.len() {
        let _ = write!(out, " shown of {total}");
    }
    let _ = write!(out, "\nQuery time: {:.3} ms", elapsed.as_micros() as f64 / 1000.0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::employees::Gender;

    fn model(last: &str, first: &str, middle: Option<&str>) -> employees::Model {
        employees::Model {
            id: 1,
            last_name: last.to_string(),
            first_name: first.to_string(),
            middle_name: middle.map(str::to_string),
            birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            gender: Gender::Female,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
    }

    #[test]
    fn test_employee_line() {
        let line = employee_line(&model("Fisher", "Anna", Some("Maria")), today());
        assert!(line.starts_with("Fisher Anna Maria "));
        assert!(line.ends_with("1990-06-15 Female  33"), "{line:?}");
        assert_eq!(line.len(), header().len());
    }

    #[test]
    fn test_listing_footer() {
        let rows = vec![model("Adams", "Beth", None), model("Brown", "Cara", None)];
        let out = listing(&rows, today());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Full name"));
        assert!(lines[1].starts_with("Adams Beth"));
        assert_eq!(lines[3], "2 record(s)");
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(listing(&[], today()).lines().last(), Some("0 record(s)"));
    }

    #[test]
    fn test_timed_listing() {
        let rows = vec![model("Ford", "Anna", None)];
        let out = timed_listing(&rows, 5, Duration::from_micros(12_345), today());

        assert!(out.contains("1 record(s) shown of 5"), "{out}");
        assert!(out.ends_with("Query time: 12.345 ms"), "{out}");
    }
}
