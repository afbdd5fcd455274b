use derive_getters::Getters;
use derive_new::new;

/// A tracked stock as enumerated from the database. Read-only here; the
/// stock table is owned externally.
#[derive(Clone, Debug, Getters, new)]
pub struct Stock {
    id: i64,
    symbol: String,
}
