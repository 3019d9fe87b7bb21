use crate::core::errors::ExchangeError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Exchange name the v1 order endpoint expects
pub const ORDER_EXCHANGE: &str = "bitfinex";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// v1 order types. `Exchange*` variants trade the exchange wallet,
/// the others trade margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "market")]
    Market,
    #[serde(rename = "limit")]
    Limit,
    #[serde(rename = "stop")]
    Stop,
    #[serde(rename = "trailing-stop")]
    TrailingStop,
    #[serde(rename = "fill-or-kill")]
    FillOrKill,
    #[serde(rename = "exchange market")]
    ExchangeMarket,
    #[serde(rename = "exchange limit")]
    ExchangeLimit,
    #[serde(rename = "exchange stop")]
    ExchangeStop,
    #[serde(rename = "exchange trailing-stop")]
    ExchangeTrailingStop,
    #[serde(rename = "exchange fill-or-kill")]
    ExchangeFillOrKill,
}

impl OrderType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
            Self::Stop => "stop",
            Self::TrailingStop => "trailing-stop",
            Self::FillOrKill => "fill-or-kill",
            Self::ExchangeMarket => "exchange market",
            Self::ExchangeLimit => "exchange limit",
            Self::ExchangeStop => "exchange stop",
            Self::ExchangeTrailingStop => "exchange trailing-stop",
            Self::ExchangeFillOrKill => "exchange fill-or-kill",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wallet a deposit address is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletName {
    Exchange,
    Margin,
    Funding,
}

/// A v1 order submission.
///
/// Amounts and prices go on the wire as strings with their scale intact,
/// so `Decimal::new(10, 1)` is sent as `"1.0"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub symbol: String,
    pub amount: Decimal,
    pub price: Decimal,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub is_hidden: bool,
    pub is_postonly: bool,
    /// Stop price of the second leg when this is a one-cancels-other order
    pub oco_price: Option<Decimal>,
}

impl NewOrder {
    pub fn new(
        symbol: impl Into<String>,
        amount: Decimal,
        price: Decimal,
        side: OrderSide,
        order_type: OrderType,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            price,
            side,
            order_type,
            is_hidden: false,
            is_postonly: false,
            oco_price: None,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    pub fn post_only(mut self) -> Self {
        self.is_postonly = true;
        self
    }

    pub fn with_oco(mut self, price: Decimal) -> Self {
        self.oco_price = Some(price);
        self
    }

    /// Request parameters, with the fixed defaults the exchange expects
    pub fn to_params(&self) -> Result<Map<String, Value>, ExchangeError> {
        if self.symbol.is_empty() {
            return Err(ExchangeError::InvalidParameters(
                "Order symbol cannot be empty".to_string(),
            ));
        }
        if self.amount <= Decimal::ZERO {
            return Err(ExchangeError::InvalidParameters(format!(
                "Order amount must be positive, got {}",
                self.amount
            )));
        }

        let (buy_price_oco, sell_price_oco) = match (self.oco_price, self.side) {
            (Some(price), OrderSide::Buy) => (Some(price), None),
            (Some(price), OrderSide::Sell) => (None, Some(price)),
            (None, _) => (None, None),
        };

        let wire = NewOrderParams {
            symbol: &self.symbol,
            amount: self.amount,
            price: self.price,
            exchange: ORDER_EXCHANGE,
            side: self.side,
            order_type: self.order_type,
            is_hidden: self.is_hidden,
            is_postonly: self.is_postonly,
            use_all_available: 0,
            ocoorder: self.oco_price.is_some(),
            buy_price_oco,
            sell_price_oco,
        };

        match serde_json::to_value(wire)? {
            Value::Object(map) => Ok(map),
            _ => Err(ExchangeError::Other(
                "Order parameters did not serialize to an object".to_string(),
            )),
        }
    }
}

#[derive(Serialize)]
struct NewOrderParams<'a> {
    symbol: &'a str,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    price: Decimal,
    exchange: &'static str,
    side: OrderSide,
    #[serde(rename = "type")]
    order_type: OrderType,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    is_hidden: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    is_postonly: bool,
    use_all_available: u8,
    ocoorder: bool,
    #[serde(serialize_with = "serialize_oco_leg")]
    buy_price_oco: Option<Decimal>,
    #[serde(serialize_with = "serialize_oco_leg")]
    sell_price_oco: Option<Decimal>,
}

/// An unused OCO leg is sent as the number `0`, a used one as its price string
fn serialize_oco_leg<S>(price: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match price {
        Some(price) => rust_decimal::serde::str::serialize(price, serializer),
        None => serializer.serialize_u8(0),
    }
}

/// Parameters of `/v1/deposit/new`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepositRequest {
    /// Deposit method, e.g. `bitcoin`, `litecoin`, `ethereum`
    pub method: String,
    pub wallet_name: WalletName,
    /// `1` asks for a fresh address instead of the current one
    #[serde(serialize_with = "serialize_flag")]
    pub renew: bool,
}

fn serialize_flag<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u8(u8::from(*flag))
}

impl DepositRequest {
    pub fn to_params(&self) -> Result<Map<String, Value>, ExchangeError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Err(ExchangeError::Other(
                "Deposit parameters did not serialize to an object".to_string(),
            )),
        }
    }
}
