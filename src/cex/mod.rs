pub mod binance;
pub mod bybit;

// Re-export
pub use binance::Binance;
pub use bybit::{Bybit, Market};
