use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::bitfinex::endpoints;
use serde_json::{Map, Value};
use tracing::instrument;

/// v2 authenticated calls. The transport must carry a `BitfinexV2Signer`.
#[derive(Debug, Clone)]
pub struct Trading<R: RestClient> {
    rest: R,
}

impl<R: RestClient> Trading<R> {
    pub fn new(rest: R) -> Self {
        Self { rest }
    }

    pub fn can_sign(&self) -> bool {
        self.rest.can_sign()
    }

    /// Fetch active orders
    #[instrument(skip(self), fields(exchange = "bitfinex"))]
    pub async fn active_orders(&self) -> Result<Value, ExchangeError> {
        self.rest
            .post_signed(endpoints::V2_ACTIVE_ORDERS, &Map::new())
            .await
    }
}
