//! Schema provisioning for the `app.employees` table.

use crate::entities::SCHEMA;
use sea_orm::{ConnectionTrait, DbErr};

/// Name of the index backing the gender + last name prefix query.
pub const GENDER_LAST_NAME_INDEX: &str = "employees_gender_last_name_idx";

/// DDL creating the schema and the employees table. Safe to run repeatedly.
pub fn create_table_sql() -> String {
    format!(
        r#"
        CREATE SCHEMA IF NOT EXISTS {SCHEMA};

        CREATE TABLE IF NOT EXISTS {SCHEMA}.employees (
            id          BIGSERIAL PRIMARY KEY,
            last_name   TEXT NOT NULL,
            first_name  TEXT NOT NULL,
            middle_name TEXT,
            birth_date  DATE NOT NULL,
            gender      TEXT NOT NULL CHECK (gender IN ('Male', 'Female'))
        );
        "#
    )
}

/// DDL for the prefix-search index. `text_pattern_ops` lets `LIKE 'F%'` use
/// the index regardless of the database collation.
pub fn create_index_sql() -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS {GENDER_LAST_NAME_INDEX} \
         ON {SCHEMA}.employees (gender, last_name text_pattern_ops)"
    )
}

/// Create the schema and the employees table.
pub async fn create_table<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    db.execute_unprepared(&create_table_sql()).await?;
    tracing::info!("Table {SCHEMA}.employees is ready");
    Ok(())
}

/// Create the query index and refresh planner statistics.
pub async fn optimize<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    db.execute_unprepared(&create_index_sql()).await?;
    tracing::info!("Index {GENDER_LAST_NAME_INDEX} is ready");

    db.execute_unprepared(&format!("ANALYZE {SCHEMA}.employees")).await?;
    tracing::debug!("Statistics refreshed for {SCHEMA}.employees");
    Ok(())
}

/// Remove every employee row and reset the id sequence.
pub async fn truncate<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    db.execute_unprepared(&format!("TRUNCATE TABLE {SCHEMA}.employees RESTART IDENTITY"))
        .await?;
    tracing::info!("Table {SCHEMA}.employees truncated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Statement, Transaction};

    fn ok() -> MockExecResult {
        MockExecResult { last_insert_id: 0, rows_affected: 0 }
    }

    #[test]
    fn test_create_table_sql_shape() {
        let sql = create_table_sql();
        assert!(sql.contains("CREATE SCHEMA IF NOT EXISTS app;"));
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS app.employees"));
        assert!(sql.contains("middle_name TEXT,"));
        assert!(sql.contains("CHECK (gender IN ('Male', 'Female'))"));
    }

    #[test]
    fn test_create_index_sql() {
        assert_eq!(
            create_index_sql(),
            "CREATE INDEX IF NOT EXISTS employees_gender_last_name_idx \
             ON app.employees (gender, last_name text_pattern_ops)"
        );
    }

    #[tokio::test]
    async fn test_optimize_runs_index_then_analyze() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok(), ok()])
            .into_connection();

        optimize(&db).await.unwrap();

        assert_eq!(
            db.into_transaction_log(),
            [
                Transaction::one(Statement::from_string(DatabaseBackend::Postgres, create_index_sql())),
                Transaction::one(Statement::from_string(
                    DatabaseBackend::Postgres,
                    "ANALYZE app.employees".to_owned()
                )),
            ]
        );
    }
}
