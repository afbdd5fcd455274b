use rust_decimal::prelude::ToPrimitive;
use sqlx::{QueryBuilder, Sqlite, pool::PoolConnection};

use crate::{error::LoadError, models::PriceRow};

/// Appends all rows to stock_price in a single multi-row INSERT on the
/// caller's connection. No conflict handling; duplicates are accepted.
pub async fn insert_price_rows(
    connection: &mut PoolConnection<Sqlite>,
    rows: &[PriceRow],
) -> Result<(), LoadError> {
    if rows.is_empty() {
        return Ok(());
    }

    let mut builder = QueryBuilder::<Sqlite>::new(
        "INSERT INTO stock_price (stock_id, time, open, high, low, close, volume) ",
    );

    builder.push_values(rows, |mut values, row| {
        values
            .push_bind(*row.stock_id())
            .push_bind(*row.time())
            .push_bind(row.open().to_f64())
            .push_bind(row.high().to_f64())
            .push_bind(row.low().to_f64())
            .push_bind(row.close().to_f64())
            .push_bind(*row.volume());
    });

    builder.build().execute(&mut **connection).await?;

    Ok(())
}
