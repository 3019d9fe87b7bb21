pub mod builder;
pub mod connector;
pub mod endpoints;
pub mod signer;
pub mod types;

// Re-export main components
pub use builder::{build_connector, BitfinexBuilder};
pub use connector::{Account, BitfinexConnector, MarketData, Trading};
pub use endpoints::{V1Endpoint, DEFAULT_SYMBOL};
pub use signer::{BitfinexV1Signer, BitfinexV2Signer};
pub use types::{DepositRequest, NewOrder, OrderSide, OrderType, WalletName};
