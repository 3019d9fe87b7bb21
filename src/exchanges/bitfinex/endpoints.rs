//! Endpoint catalog: every path this client talks to.
//!
//! v2 paths are relative (`v2/...`) because the v2 signature covers
//! `/api/<path>`. v1 paths keep their leading slash since the same string is
//! sent as the `request` field of the signed payload.

/// Symbol the public helpers have historically defaulted to
pub const DEFAULT_SYMBOL: &str = "tBTCUSD";

/// Authenticated v2 endpoints
pub const V2_ACTIVE_ORDERS: &str = "v2/auth/r/orders";

pub fn ticker(symbol: &str) -> String {
    format!("v2/ticker/{}", symbol)
}

pub fn trades(symbol: &str) -> String {
    format!("v2/trades/{}/hist", symbol)
}

pub fn book(symbol: &str, precision: &str) -> String {
    format!("v2/book/{}/{}", symbol, precision)
}

pub fn stats(key: &str, size: &str, symbol: &str, side: &str, section: &str) -> String {
    format!("v2/stats1/{}:{}:{}:{}/{}", key, size, symbol, side, section)
}

pub fn candles(timeframe: &str, symbol: &str, section: &str) -> String {
    format!("v2/candles/trade:{}:{}/{}", timeframe, symbol, section)
}

/// Authenticated v1 endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum V1Endpoint {
    AccountInfos,
    AccountFees,
    Balances,
    CancelOrder,
    NewDeposit,
    KeyInfo,
    NewOrder,
    Summary,
}

impl V1Endpoint {
    pub const ALL: [Self; 8] = [
        Self::AccountInfos,
        Self::AccountFees,
        Self::Balances,
        Self::CancelOrder,
        Self::NewDeposit,
        Self::KeyInfo,
        Self::NewOrder,
        Self::Summary,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::AccountInfos => "/v1/account_infos",
            Self::AccountFees => "/v1/account_fees",
            Self::Balances => "/v1/balances",
            Self::CancelOrder => "/v1/order/cancel",
            Self::NewDeposit => "/v1/deposit/new",
            Self::KeyInfo => "/v1/key_info",
            Self::NewOrder => "/v1/order/new",
            Self::Summary => "/v1/summary",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        assert_eq!(ticker(DEFAULT_SYMBOL), "v2/ticker/tBTCUSD");
        assert_eq!(trades("tETHUSD"), "v2/trades/tETHUSD/hist");
        assert_eq!(book("tBTCUSD", "P0"), "v2/book/tBTCUSD/P0");
        assert_eq!(
            stats("pos.size", "1m", "tBTCUSD", "long", "hist"),
            "v2/stats1/pos.size:1m:tBTCUSD:long/hist"
        );
        assert_eq!(
            candles("1m", "tBTCUSD", "last"),
            "v2/candles/trade:1m:tBTCUSD/last"
        );
    }

    #[test]
    fn test_v1_paths_are_absolute_and_unique() {
        let mut paths: Vec<_> = V1Endpoint::ALL.iter().map(|e| e.path()).collect();
        assert!(paths.iter().all(|p| p.starts_with("/v1/")));
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), V1Endpoint::ALL.len());
    }
}
