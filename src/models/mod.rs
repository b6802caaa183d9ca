//! Data models for employee records.

pub mod employee;

pub use employee::{NewEmployee, age_on, is_capitalized_word};
