use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::bitfinex::endpoints::V1Endpoint;
use crate::exchanges::bitfinex::types::{DepositRequest, NewOrder};
use serde_json::{json, Map, Value};
use tracing::instrument;

/// v1 authenticated calls. The transport must carry a `BitfinexV1Signer`.
#[derive(Debug, Clone)]
pub struct Account<R: RestClient> {
    rest: R,
}

impl<R: RestClient> Account<R> {
    pub fn new(rest: R) -> Self {
        Self { rest }
    }

    pub fn can_sign(&self) -> bool {
        self.rest.can_sign()
    }

    async fn call(
        &self,
        endpoint: V1Endpoint,
        params: Map<String, Value>,
    ) -> Result<Value, ExchangeError> {
        self.rest.post_signed(endpoint.path(), &params).await
    }

    #[instrument(skip(self), fields(exchange = "bitfinex"))]
    pub async fn account_infos(&self) -> Result<Value, ExchangeError> {
        self.call(V1Endpoint::AccountInfos, Map::new()).await
    }

    #[instrument(skip(self), fields(exchange = "bitfinex"))]
    pub async fn account_fees(&self) -> Result<Value, ExchangeError> {
        self.call(V1Endpoint::AccountFees, Map::new()).await
    }

    /// Wallet balances
    #[instrument(skip(self), fields(exchange = "bitfinex"))]
    pub async fn balances(&self) -> Result<Value, ExchangeError> {
        self.call(V1Endpoint::Balances, Map::new()).await
    }

    #[instrument(skip(self), fields(exchange = "bitfinex"))]
    pub async fn cancel_order(&self, order_id: u64) -> Result<Value, ExchangeError> {
        let mut params = Map::new();
        params.insert("order_id".to_string(), json!(order_id));
        self.call(V1Endpoint::CancelOrder, params).await
    }

    /// Get (or renew) a deposit address
    #[instrument(skip(self, request), fields(exchange = "bitfinex", method = %request.method))]
    pub async fn new_deposit(&self, request: &DepositRequest) -> Result<Value, ExchangeError> {
        self.call(V1Endpoint::NewDeposit, request.to_params()?).await
    }

    /// Permissions attached to the API key
    #[instrument(skip(self), fields(exchange = "bitfinex"))]
    pub async fn key_info(&self) -> Result<Value, ExchangeError> {
        self.call(V1Endpoint::KeyInfo, Map::new()).await
    }

    #[instrument(skip(self, order), fields(exchange = "bitfinex", symbol = %order.symbol, side = ?order.side))]
    pub async fn new_order(&self, order: &NewOrder) -> Result<Value, ExchangeError> {
        self.call(V1Endpoint::NewOrder, order.to_params()?).await
    }

    /// 30-day trading summary
    #[instrument(skip(self), fields(exchange = "bitfinex"))]
    pub async fn summary(&self) -> Result<Value, ExchangeError> {
        self.call(V1Endpoint::Summary, Map::new()).await
    }
}
