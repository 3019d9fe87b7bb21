pub mod bitfinex;
