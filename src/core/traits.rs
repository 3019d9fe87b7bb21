use crate::core::errors::ExchangeError;
use crate::exchanges::bitfinex::types::{DepositRequest, NewOrder};
use async_trait::async_trait;
use serde_json::Value;

/// Public market data. Responses are returned as parsed, unmodified JSON.
#[async_trait]
pub trait MarketDataSource {
    async fn ticker(&self, symbol: &str) -> Result<Value, ExchangeError>;

    /// Trade history; `query` accepts e.g. `limit`, `start`, `end`, `sort`
    async fn trades(&self, symbol: &str, query: &[(&str, &str)]) -> Result<Value, ExchangeError>;

    /// Order book at the given precision (`P0`..`P4`, or `R0` for raw)
    async fn books(
        &self,
        symbol: &str,
        precision: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ExchangeError>;

    async fn stats(
        &self,
        key: &str,
        size: &str,
        symbol: &str,
        side: &str,
        section: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ExchangeError>;

    async fn candles(
        &self,
        timeframe: &str,
        symbol: &str,
        section: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ExchangeError>;
}

#[async_trait]
pub trait OrderPlacer {
    async fn active_orders(&self) -> Result<Value, ExchangeError>;

    async fn new_order(&self, order: &NewOrder) -> Result<Value, ExchangeError>;

    async fn cancel_order(&self, order_id: u64) -> Result<Value, ExchangeError>;
}

#[async_trait]
pub trait AccountInfo {
    async fn account_infos(&self) -> Result<Value, ExchangeError>;
    async fn account_fees(&self) -> Result<Value, ExchangeError>;
    async fn balances(&self) -> Result<Value, ExchangeError>;
    async fn key_info(&self) -> Result<Value, ExchangeError>;
    async fn summary(&self) -> Result<Value, ExchangeError>;
    async fn new_deposit(&self, request: &DepositRequest) -> Result<Value, ExchangeError>;
}

// Composite trait for when you need all functionality
pub trait ExchangeConnector: MarketDataSource + OrderPlacer + AccountInfo {}
