use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use crate::{api::dto::QuoteDto, error::LoadError};

const SERIES_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One tuple destined for the stock_price table. Prices are rounded to
/// two fractional digits at construction; volume passes through.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct PriceRow {
    stock_id: i64,
    time: NaiveDateTime,
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    volume: i64,
}

impl PriceRow {
    pub fn from_quote(stock_id: i64, quote: &QuoteDto) -> Result<Self, LoadError> {
        let time = NaiveDateTime::parse_from_str(quote.time(), SERIES_TIME_FORMAT)?;

        Ok(Self::new(
            stock_id,
            time,
            quote.open().round_dp(2),
            quote.high().round_dp(2),
            quote.low().round_dp(2),
            quote.close().round_dp(2),
            *quote.volume(),
        ))
    }
}
