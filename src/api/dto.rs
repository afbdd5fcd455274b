use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Response envelope of the time-and-sales endpoint.
#[derive(Debug, Deserialize, Getters, new)]
pub struct TimeSalesDto {
    series: SeriesDto,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct SeriesDto {
    data: Vec<QuoteDto>,
}

/// One bar of price data as returned by the API.
#[derive(Clone, Debug, Deserialize, Getters, new)]
pub struct QuoteDto {
    time: String,
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    volume: i64,
}

impl TimeSalesDto {
    pub fn into_quotes(self) -> Vec<QuoteDto> {
        self.series.data
    }
}
