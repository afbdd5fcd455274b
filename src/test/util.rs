use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use reqwest::StatusCode;
use sqlx::{Row, SqlitePool, sqlite::SqliteConnectOptions};
use tempfile::TempDir;

use crate::{
    api::{QuoteSource, dto::QuoteDto},
    db,
    error::LoadError,
    models::QueryWindow,
};

pub async fn temp_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("prices.db"))
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await.unwrap();
    db::init::create_stock(&pool).await.unwrap();
    db::init::create_stock_price(&pool).await.unwrap();

    (dir, pool)
}

pub async fn insert_stock(connection: &SqlitePool, symbol: &str) -> i64 {
    sqlx::query("INSERT INTO stock (symbol) VALUES (?)")
        .bind(symbol)
        .execute(connection)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn price_row_count(connection: &SqlitePool) -> i64 {
    sqlx::query("SELECT COUNT(*) AS count FROM stock_price")
        .fetch_one(connection)
        .await
        .unwrap()
        .get::<i64, _>("count")
}

/// Quote source backed by canned data; failing symbols answer the way an
/// HTTP 500 would.
pub struct MockSource {
    quotes: HashMap<String, Vec<QuoteDto>>,
    failing: HashSet<String>,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            quotes: HashMap::new(),
            failing: HashSet::new(),
        }
    }

    pub fn with_quotes(mut self, symbol: &str, quotes: Vec<QuoteDto>) -> Self {
        self.quotes.insert(symbol.to_string(), quotes);
        self
    }

    pub fn with_failure(mut self, symbol: &str) -> Self {
        self.failing.insert(symbol.to_string());
        self
    }
}

#[async_trait]
impl QuoteSource for MockSource {
    async fn time_sales(&self, window: &QueryWindow) -> Result<Vec<QuoteDto>, LoadError> {
        if self.failing.contains(window.symbol()) {
            return Err(LoadError::Api(StatusCode::INTERNAL_SERVER_ERROR));
        }

        Ok(self.quotes.get(window.symbol()).cloned().unwrap_or_default())
    }
}
