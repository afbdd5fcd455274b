pub mod price_row;
pub mod query_window;
pub mod stock;

pub use price_row::PriceRow;
pub use query_window::QueryWindow;
pub use stock::Stock;
