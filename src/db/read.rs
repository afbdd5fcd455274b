use anyhow::{Context, Result};
use sqlx::{Row, SqlitePool};

use crate::models::Stock;

/// Enumerates the tracked stocks, up to `limit` rows. Any database error
/// aborts the run; there is no partial enumeration.
pub async fn tracked_stocks(connection: &SqlitePool, limit: i64) -> Result<Vec<Stock>> {
    let rows = sqlx::query(
        r#"
        SELECT id, symbol FROM stock
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(connection)
    .await?;

    rows.into_iter()
        .map(|row| {
            let id = row
                .try_get::<i64, _>("id")
                .with_context(|| "Failed to parse i64 from column 'id'")?;
            let symbol = row
                .try_get::<String, _>("symbol")
                .with_context(|| "Failed to parse String from column 'symbol'")?;

            Ok(Stock::new(id, symbol))
        })
        .collect()
}
