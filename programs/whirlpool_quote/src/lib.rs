//! Client-side math for whirlpool concentrated liquidity pools.
//!
//! Reproduces the program's tick ⇄ sqrt price conversion bit for bit, turns
//! liquidity into token amounts and back, and builds slippage-bounded
//! increase/decrease liquidity quotes. Nothing here performs I/O.

pub mod error;
pub mod math;
pub mod quote;
pub mod state;
pub mod utils;

pub use error::MathError;
pub use math::{Percentage, TokenAmounts};
pub use quote::QuoteBuilder;
