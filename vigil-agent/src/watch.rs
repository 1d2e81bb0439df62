//! Watches
//!
//! A watch pairs a SQL query with an action to run for every row the query
//! returns. `TypedWatch` is the stock implementation, generic over any
//! `sqlx::FromRow` row type; watches are held as trait objects so one
//! agent can mix row types freely.

use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgRow};
use std::marker::PhantomData;

/// A named query whose rows are dispatched to an action each cycle
#[async_trait]
pub trait Watch: Send + Sync {
    /// Name used in logs and cycle reports
    fn name(&self) -> &str;

    /// Runs the watch query once, dispatching every row
    ///
    /// Returns the number of rows dispatched.
    async fn run(&self, pool: &PgPool) -> Result<usize, sqlx::Error>;
}

/// Watch over a concrete row type
///
/// Fetches all rows of `query` as `T` and invokes `action` once per row.
pub struct TypedWatch<T, F>
where
    T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Sync + Unpin + 'static,
    F: Fn(&T) + Send + Sync + 'static,
{
    name: String,
    query: String,
    action: F,
    _row: PhantomData<fn(&T)>,
}

impl<T, F> TypedWatch<T, F>
where
    T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Sync + Unpin + 'static,
    F: Fn(&T) + Send + Sync + 'static,
{
    /// Creates a new typed watch
    pub fn new(name: impl Into<String>, query: impl Into<String>, action: F) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
            action,
            _row: PhantomData,
        }
    }

    /// The SQL this watch runs each cycle
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[async_trait]
impl<T, F> Watch for TypedWatch<T, F>
where
    T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Sync + Unpin + 'static,
    F: Fn(&T) + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, pool: &PgPool) -> Result<usize, sqlx::Error> {
        let rows: Vec<T> = sqlx::query_as::<_, T>(&self.query).fetch_all(pool).await?;

        for row in &rows {
            (self.action)(row);
        }

        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(sqlx::FromRow)]
    struct Row {
        #[allow(dead_code)]
        id: i32,
    }

    #[test]
    fn test_typed_watch_metadata() {
        let watch = TypedWatch::new("outbox", "SELECT id FROM outbox", |_: &Row| {});
        assert_eq!(watch.name(), "outbox");
        assert_eq!(watch.query(), "SELECT id FROM outbox");
    }

    #[test]
    fn test_typed_watch_is_object_safe() {
        let watch: Box<dyn Watch> =
            Box::new(TypedWatch::new("outbox", "SELECT id FROM outbox", |_: &Row| {}));
        assert_eq!(watch.name(), "outbox");
    }
}
