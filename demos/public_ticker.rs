use bitfinex::exchanges::bitfinex::DEFAULT_SYMBOL;
use bitfinex::{AccountInfo, BitfinexBuilder, ExchangeConfig, Lenient, MarketDataSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Credentials are optional: BITFINEX_API_KEY / BITFINEX_SECRET_KEY, or a .env file
    let config = ExchangeConfig::from_env_file("BITFINEX").unwrap_or_else(|_| ExchangeConfig::read_only());
    let has_credentials = config.has_credentials();
    let bitfinex = BitfinexBuilder::new().with_config(config).build()?;

    println!("=== Ticker {} ===", DEFAULT_SYMBOL);
    match bitfinex.ticker(DEFAULT_SYMBOL).await {
        Ok(ticker) => println!("{}", ticker),
        Err(e) => println!("Error fetching ticker: {}", e),
    }

    println!("\n=== Last 5 trades ===");
    if let Some(trades) = bitfinex.trades(DEFAULT_SYMBOL, &[("limit", "5")]).await.lenient() {
        println!("{}", trades);
    }

    println!("\n=== Last 1m candle ===");
    if let Some(candle) = bitfinex.candles("1m", DEFAULT_SYMBOL, "last", &[]).await.lenient() {
        println!("{}", candle);
    }

    if has_credentials {
        println!("\n=== Balances ===");
        match bitfinex.balances().await {
            Ok(balances) => println!("{}", balances),
            Err(e) => println!("Error fetching balances: {}", e),
        }
    }

    Ok(())
}
