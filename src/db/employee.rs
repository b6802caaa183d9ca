//! Employee repository: inserts and read-only reports.

use crate::entities::employees::{self, Gender};
use crate::entities::prelude::*;
use crate::entities::SCHEMA;
use crate::models::NewEmployee;
use sea_orm::*;

/// Insert a single employee and return the stored row.
pub async fn insert_one<C: ConnectionTrait>(db: &C, employee: NewEmployee) -> Result<employees::Model, DbErr> {
    employee.into_active_model().insert(db).await
}

/// Insert a batch of employees with a single multi-row INSERT.
///
/// Returns the number of rows written. An empty batch is a no-op.
pub async fn insert_batch<C: ConnectionTrait>(db: &C, batch: &[NewEmployee]) -> Result<u64, DbErr> {
    if batch.is_empty() {
        return Ok(0);
    }

    let models = batch.iter().cloned().map(NewEmployee::into_active_model);
    Employees::insert_many(models).exec_without_returning(db).await
}

/// `DISTINCT ON` keeps the first row of each group, so the trailing `id`
/// makes the oldest duplicate win.
pub fn list_unique_sql() -> String {
    format!(
        "SELECT DISTINCT ON (last_name, first_name, middle_name, birth_date) \
         id, last_name, first_name, middle_name, birth_date, gender \
         FROM {SCHEMA}.employees \
         ORDER BY last_name, first_name, middle_name, birth_date, id"
    )
}

/// Records unique by full name and birth date, ordered by full name.
pub async fn list_unique<C: ConnectionTrait>(db: &C) -> Result<Vec<employees::Model>, DbErr> {
    Employees::find()
        .from_raw_sql(Statement::from_string(DbBackend::Postgres, list_unique_sql()))
        .all(db)
        .await
}

/// Employees of `gender` whose last name starts with `prefix`, ordered by name.
pub async fn find_by_gender_and_prefix<C: ConnectionTrait>(
    db: &C,
    gender: Gender,
    prefix: &str,
) -> Result<Vec<employees::Model>, DbErr> {
    Employees::find()
        .filter(employees::Column::Gender.eq(gender))
        .filter(employees::Column::LastName.starts_with(prefix))
        .order_by_asc(employees::Column::LastName)
        .order_by_asc(employees::Column::FirstName)
        .order_by_asc(employees::Column::Id)
        .all(db)
        .await
}

/// Total number of stored employees.
pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    Employees::find().count(db).await
}
