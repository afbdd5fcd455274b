use std::collections::HashMap;

use futures::future::join_all;
use sqlx::SqlitePool;

use crate::{
    api::QuoteSource,
    config::WindowConfig,
    db,
    error::LoadError,
    models::{PriceRow, QueryWindow, Stock},
};

/// Builds the per-stock request map: every symbol gets the same window.
pub fn windows_for(stocks: &[Stock], config: &WindowConfig) -> HashMap<i64, QueryWindow> {
    stocks
        .iter()
        .map(|stock| {
            (
                *stock.id(),
                QueryWindow::new(
                    stock.symbol().clone(),
                    config.interval.clone(),
                    config.start.clone(),
                    config.end.clone(),
                    config.session_filter.clone(),
                ),
            )
        })
        .collect()
}

/// Fetches and stores quotes for every window, one concurrent unit per
/// stock. Units interleave at their I/O points and never see each other's
/// failures; a failing unit logs its window and finishes. Returns how many
/// units loaded their rows.
pub async fn load_prices<S: QuoteSource>(
    connection: &SqlitePool,
    source: &S,
    windows: &HashMap<i64, QueryWindow>,
) -> usize {
    let units = windows
        .iter()
        .map(|(stock_id, window)| load_symbol(connection, source, *stock_id, window));

    join_all(units)
        .await
        .into_iter()
        .filter(|loaded| *loaded)
        .count()
}

async fn load_symbol<S: QuoteSource>(
    connection: &SqlitePool,
    source: &S,
    stock_id: i64,
    window: &QueryWindow,
) -> bool {
    match try_load_symbol(connection, source, stock_id, window).await {
        Ok(_) => true,
        Err(err) => {
            eprintln!(
                "Warning: Unable to load {:?}: {} error: {}",
                window,
                err.category(),
                err
            );
            false
        }
    }
}

async fn try_load_symbol<S: QuoteSource>(
    connection: &SqlitePool,
    source: &S,
    stock_id: i64,
    window: &QueryWindow,
) -> Result<usize, LoadError> {
    let mut conn = connection.acquire().await?;
    let quotes = source.time_sales(window).await?;

    let rows = quotes
        .iter()
        .map(|quote| PriceRow::from_quote(stock_id, quote))
        .collect::<Result<Vec<_>, _>>()?;

    db::write::insert_price_rows(&mut conn, &rows).await?;

    Ok(rows.len())
}
