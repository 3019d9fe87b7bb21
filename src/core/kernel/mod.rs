//! Transport layer shared by every Bitfinex endpoint family
//!
//! The kernel knows how to send a request and how to ask a [`Signer`] for
//! authentication headers. It knows nothing about individual endpoints.
//!
//! # Components
//!
//! - `RestClient`: HTTP interface (`get` for public calls, `post_signed` for
//!   authenticated ones), implemented by `ReqwestRest`
//! - `Signer`: pluggable authentication scheme producing headers and body
//! - `NonceGenerator`: strictly increasing, clock-derived nonces
//!
//! # Example
//! ```rust,no_run
//! use bitfinex::core::kernel::*;
//! use bitfinex::exchanges::bitfinex::signer::BitfinexV2Signer;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RestClientConfig::new(
//!     "https://api.bitfinex.com".to_string(),
//!     "bitfinex".to_string(),
//! );
//! let signer = Arc::new(BitfinexV2Signer::new("key".to_string(), "secret".to_string()));
//! let rest = RestClientBuilder::new(config).with_signer(signer).build()?;
//!
//! let _orders = rest.post_signed("v2/auth/r/orders", &serde_json::Map::new()).await?;
//! # Ok(())
//! # }
//! ```

pub mod nonce;
pub mod rest;
pub mod signer;

pub use nonce::{NonceGenerator, NonceScale};
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{hmac_sha384_hex, SignedRequest, Signer};
