use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::{AccountInfo, ExchangeConnector, MarketDataSource, OrderPlacer};
use crate::exchanges::bitfinex::types::{DepositRequest, NewOrder};
use async_trait::async_trait;
use serde_json::Value;

pub mod account;
pub mod public;
pub mod trading;

pub use account::Account;
pub use public::MarketData;
pub use trading::Trading;

/// Bitfinex connector that composes the three client families.
///
/// Each part owns its own transport: `market` is unsigned, `trading` signs
/// with the v2 scheme and `account` with the v1 scheme.
#[derive(Debug, Clone)]
pub struct BitfinexConnector<R: RestClient> {
    pub market: MarketData<R>,
    pub trading: Trading<R>,
    pub account: Account<R>,
}

impl<R: RestClient> BitfinexConnector<R> {
    pub fn new(public_rest: R, v2_rest: R, v1_rest: R) -> Self {
        Self {
            market: MarketData::new(public_rest),
            trading: Trading::new(v2_rest),
            account: Account::new(v1_rest),
        }
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for BitfinexConnector<R> {
    async fn ticker(&self, symbol: &str) -> Result<Value, ExchangeError> {
        self.market.ticker(symbol).await
    }

    async fn trades(&self, symbol: &str, query: &[(&str, &str)]) -> Result<Value, ExchangeError> {
        self.market.trades(symbol, query).await
    }

    async fn books(
        &self,
        symbol: &str,
        precision: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ExchangeError> {
        self.market.books(symbol, precision, query).await
    }

    async fn stats(
        &self,
        key: &str,
        size: &str,
        symbol: &str,
        side: &str,
        section: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ExchangeError> {
        self.market
            .stats(key, size, symbol, side, section, query)
            .await
    }

    async fn candles(
        &self,
        timeframe: &str,
        symbol: &str,
        section: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ExchangeError> {
        self.market.candles(timeframe, symbol, section, query).await
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for BitfinexConnector<R> {
    async fn active_orders(&self) -> Result<Value, ExchangeError> {
        self.trading.active_orders().await
    }

    async fn new_order(&self, order: &NewOrder) -> Result<Value, ExchangeError> {
        self.account.new_order(order).await
    }

    async fn cancel_order(&self, order_id: u64) -> Result<Value, ExchangeError> {
        self.account.cancel_order(order_id).await
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for BitfinexConnector<R> {
    async fn account_infos(&self) -> Result<Value, ExchangeError> {
        self.account.account_infos().await
    }

    async fn account_fees(&self) -> Result<Value, ExchangeError> {
        self.account.account_fees().await
    }

    async fn balances(&self) -> Result<Value, ExchangeError> {
        self.account.balances().await
    }

    async fn key_info(&self) -> Result<Value, ExchangeError> {
        self.account.key_info().await
    }

    async fn summary(&self) -> Result<Value, ExchangeError> {
        self.account.summary().await
    }

    async fn new_deposit(&self, request: &DepositRequest) -> Result<Value, ExchangeError> {
        self.account.new_deposit(request).await
    }
}

impl<R: RestClient> ExchangeConnector for BitfinexConnector<R> {}
