pub mod core;
pub mod exchanges;

pub use crate::core::{
    config::ExchangeConfig,
    errors::{ExchangeError, Lenient},
    traits::{AccountInfo, ExchangeConnector, MarketDataSource, OrderPlacer},
};
pub use exchanges::bitfinex::{BitfinexBuilder, BitfinexConnector};
