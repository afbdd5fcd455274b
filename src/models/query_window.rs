use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

/// Request parameters for one time-and-sales fetch. Serializes to the
/// query string the API expects; `start` and `end` stay opaque strings.
#[derive(Clone, Debug, Getters, new, Serialize)]
pub struct QueryWindow {
    symbol: String,
    interval: String,
    start: String,
    end: String,
    session_filter: String,
}
