use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig, Signer};
use crate::exchanges::bitfinex::connector::{Account, BitfinexConnector, MarketData, Trading};
use crate::exchanges::bitfinex::signer::{BitfinexV1Signer, BitfinexV2Signer};
use std::sync::Arc;

const EXCHANGE_NAME: &str = "bitfinex";

/// Builder for Bitfinex clients
///
/// The base URL is fixed at build time; every client built from one builder
/// shares it.
#[derive(Debug, Clone)]
pub struct BitfinexBuilder {
    config: ExchangeConfig,
    rest_timeout: Option<u64>,
    user_agent: Option<String>,
}

impl Default for BitfinexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BitfinexBuilder {
    /// Create a builder for public access only
    pub fn new() -> Self {
        Self {
            config: ExchangeConfig::read_only(),
            rest_timeout: None,
            user_agent: None,
        }
    }

    /// Set the exchange configuration
    pub fn with_config(mut self, config: ExchangeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set API credentials
    pub fn with_credentials(mut self, api_key: String, secret_key: String) -> Self {
        let base_url = self.config.base_url.take();
        self.config = ExchangeConfig::new(api_key, secret_key);
        self.config.base_url = base_url;
        self
    }

    /// Set base URL for REST API
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.config.base_url = Some(base_url);
        self
    }

    /// Set REST client timeout in seconds
    pub fn with_rest_timeout(mut self, timeout: u64) -> Self {
        self.rest_timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    fn rest(&self, signer: Option<Arc<dyn Signer>>) -> Result<ReqwestRest, ExchangeError> {
        let mut rest_config = RestClientConfig::new(
            self.config.resolved_base_url().to_string(),
            EXCHANGE_NAME.to_string(),
        );
        if let Some(timeout) = self.rest_timeout {
            rest_config = rest_config.with_timeout(timeout);
        }
        if let Some(user_agent) = &self.user_agent {
            rest_config = rest_config.with_user_agent(user_agent.clone());
        }

        let mut builder = RestClientBuilder::new(rest_config);
        if let Some(signer) = signer {
            builder = builder.with_signer(signer);
        }
        builder.build()
    }

    fn require_credentials(&self) -> Result<(), ExchangeError> {
        if self.config.has_credentials() {
            Ok(())
        } else {
            Err(ExchangeError::AuthError(
                "API key and secret are required for authenticated clients".to_string(),
            ))
        }
    }

    fn v2_signer(&self) -> Option<Arc<dyn Signer>> {
        self.config.has_credentials().then(|| {
            Arc::new(BitfinexV2Signer::new(
                self.config.api_key().to_string(),
                self.config.secret_key().to_string(),
            )) as Arc<dyn Signer>
        })
    }

    fn v1_signer(&self) -> Option<Arc<dyn Signer>> {
        self.config.has_credentials().then(|| {
            Arc::new(BitfinexV1Signer::new(
                self.config.api_key().to_string(),
                self.config.secret_key().to_string(),
            )) as Arc<dyn Signer>
        })
    }

    /// Build the unauthenticated market data client
    pub fn build_public(&self) -> Result<MarketData<ReqwestRest>, ExchangeError> {
        Ok(MarketData::new(self.rest(None)?))
    }

    /// Build the v2 authenticated client; fails without credentials
    pub fn build_trading(&self) -> Result<Trading<ReqwestRest>, ExchangeError> {
        self.require_credentials()?;
        Ok(Trading::new(self.rest(self.v2_signer())?))
    }

    /// Build the v1 authenticated client; fails without credentials
    pub fn build_account(&self) -> Result<Account<ReqwestRest>, ExchangeError> {
        self.require_credentials()?;
        Ok(Account::new(self.rest(self.v1_signer())?))
    }

    /// Build the full connector.
    ///
    /// Without credentials the authenticated parts are built unsigned and
    /// their calls fail with [`ExchangeError::AuthError`].
    pub fn build(self) -> Result<BitfinexConnector<ReqwestRest>, ExchangeError> {
        Ok(BitfinexConnector::new(
            self.rest(None)?,
            self.rest(self.v2_signer())?,
            self.rest(self.v1_signer())?,
        ))
    }
}

/// Create a connector from configuration
pub fn build_connector(config: ExchangeConfig) -> Result<BitfinexConnector<ReqwestRest>, ExchangeError> {
    BitfinexBuilder::new().with_config(config).build()
}
