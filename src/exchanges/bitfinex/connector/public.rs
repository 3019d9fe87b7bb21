use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::MarketDataSource;
use crate::exchanges::bitfinex::endpoints;
use async_trait::async_trait;
use serde_json::Value;
use tracing::instrument;

/// Public market data over unauthenticated v2 GETs
#[derive(Debug, Clone)]
pub struct MarketData<R: RestClient> {
    rest: R,
}

impl<R: RestClient> MarketData<R> {
    pub fn new(rest: R) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for MarketData<R> {
    #[instrument(skip(self), fields(exchange = "bitfinex", symbol = %symbol))]
    async fn ticker(&self, symbol: &str) -> Result<Value, ExchangeError> {
        self.rest.get(&endpoints::ticker(symbol), &[]).await
    }

    #[instrument(skip(self, query), fields(exchange = "bitfinex", symbol = %symbol))]
    async fn trades(&self, symbol: &str, query: &[(&str, &str)]) -> Result<Value, ExchangeError> {
        self.rest.get(&endpoints::trades(symbol), query).await
    }

    #[instrument(skip(self, query), fields(exchange = "bitfinex", symbol = %symbol, precision = %precision))]
    async fn books(
        &self,
        symbol: &str,
        precision: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ExchangeError> {
        self.rest.get(&endpoints::book(symbol, precision), query).await
    }

    #[instrument(skip(self, query), fields(exchange = "bitfinex", key = %key, symbol = %symbol))]
    async fn stats(
        &self,
        key: &str,
        size: &str,
        symbol: &str,
        side: &str,
        section: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ExchangeError> {
        self.rest
            .get(&endpoints::stats(key, size, symbol, side, section), query)
            .await
    }

    #[instrument(skip(self, query), fields(exchange = "bitfinex", timeframe = %timeframe, symbol = %symbol))]
    async fn candles(
        &self,
        timeframe: &str,
        symbol: &str,
        section: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ExchangeError> {
        self.rest
            .get(&endpoints::candles(timeframe, symbol, section), query)
            .await
    }
}
