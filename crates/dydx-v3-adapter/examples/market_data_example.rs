/*
[INPUT]:  Market identifier (e.g., "BTC-USD") and optional V3_API_HOST
[OUTPUT]: Public market data (server time, markets, orderbook, stats)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use dydx_v3_adapter::constants::{API_HOST_MAINNET, MARKET_BTC_USD, MARKET_STATISTIC_DAY_ONE};
use dydx_v3_adapter::*;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    println!("=== dYdX Market Data Example ===\n");

    let host = std::env::var("V3_API_HOST").unwrap_or_else(|_| API_HOST_MAINNET.to_string());
    let client = match DydxClient::new(&host) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.host());

    println!("Querying server time...");
    match client.get_time().await.and_then(|r| r.json::<ServerTimeResponse>()) {
        Ok(time) => println!("✓ Server time: {} ({})", time.iso, time.epoch),
        Err(e) => println!("✗ Error: {}", e),
    }

    let market = MARKET_BTC_USD;

    println!("\nQuerying market {}...", market);
    match client.get_markets(Some(market)).await {
        Ok(response) => println!("✓ Market: {}", response.data),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying orderbook for {}...", market);
    match client.get_orderbook(market).await.and_then(|r| r.json::<OrderbookResponse>()) {
        Ok(book) => println!("✓ Orderbook: {} bids, {} asks", book.bids.len(), book.asks.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying 1-day stats for {}...", market);
    match client.get_stats(Some(market), Some(MARKET_STATISTIC_DAY_ONE)).await {
        Ok(response) => println!("✓ Stats: {}", response.data),
        Err(DydxError::Api(err)) => println!("✗ Rejected with status {}: {}", err.status_code, err.msg),
        Err(e) => println!("✗ Transport error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
