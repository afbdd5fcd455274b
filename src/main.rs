use std::time::Instant;

use price_loader::{
    api::TimeSalesApi,
    config::Config,
    db,
    services::{load_prices, windows_for},
};

const TRACKED_STOCK_LIMIT: i64 = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    let connection = db::connect(&config.database).await?;
    db::init::create_stock(&connection).await?;
    db::init::create_stock_price(&connection).await?;

    let start = Instant::now();

    let stocks = db::read::tracked_stocks(&connection, TRACKED_STOCK_LIMIT).await?;
    let windows = windows_for(&stocks, &config.window);
    println!("{:?}", windows);

    let api = TimeSalesApi::new(&config.api);
    let loaded = load_prices(&connection, &api, &windows).await;
    println!("Finalized all {} symbols, {} loaded.", windows.len(), loaded);

    println!("Time elapsed: {:.2?}", start.elapsed());

    Ok(())
}
