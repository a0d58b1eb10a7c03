//! Diesel row models for the counter table.

use diesel::prelude::*;

use super::schema::counter;

/// A row of the `counter` table.
///
/// The table holds a single row with a fixed identity (`id = 1`); the
/// identity column exists so that reads and updates address the row
/// explicitly instead of relying on "first row" semantics.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = counter)]
pub struct CounterRow {
    pub id: i64,
    pub count: i64,
}
