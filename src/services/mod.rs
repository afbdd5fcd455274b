pub mod loader;

pub use loader::{load_prices, windows_for};
