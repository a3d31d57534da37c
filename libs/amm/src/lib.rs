//! # BHO Swap AMM - Constant-Product Quote Engine
//!
//! ## Purpose
//!
//! Exact integer quoting for BHO Swap pairs: swap output/input amounts,
//! protocol fees, slippage bounds, LP share minting and burning, and price
//! impact. Every result matches what the pair and router contracts compute
//! on-chain, down to the truncation direction of each division.
//!
//! ## Integration Points
//!
//! - **Input Sources**: Reserves and LP supply from a [`PoolStateProvider`]
//!   (contract query client, cache, fixture) or passed in directly
//! - **Output Destinations**: Transaction builders that turn `*_min` / `*_max`
//!   bounds into on-chain slippage guards, user interfaces
//! - **Trading Paths**: Exactly two tokens per swap; the native coin is `BHO`
//!
//! ## Precision
//!
//! - Amounts are `U256`; every two-factor product is taken in `U512`
//! - No floating point anywhere in the quote path
//! - Inputs up to `2^128 - 1` never overflow; larger inputs either succeed
//!   exactly or fail with [`QuoteError::Overflow`]
//!
//! ## Example
//!
//! ```rust
//! use bho_swap_amm::{QuoteOptions, Slippage, SwapQuoter, U256};
//!
//! let quoter = SwapQuoter::new(Slippage::from_bps(50).unwrap());
//! let quote = quoter
//!     .get_amount_out(
//!         U256::from(1_000u64),
//!         U256::from(1_000_000u64),
//!         U256::from(2_000_000u64),
//!         QuoteOptions::default(),
//!     )
//!     .unwrap();
//! assert_eq!(quote.amount_out, U256::from(1_992u64));
//! assert_eq!(quote.amount_out_min, U256::from(1_983u64));
//! ```

pub mod amount_serde;
pub mod constants;
pub mod error;
pub mod liquidity_math;
mod math;
pub mod pool_traits;
pub mod quote;
pub mod quoter;
pub mod swap_math;
pub mod token;

pub use constants::{
    MAX_SLIPPAGE_BPS, MAX_U128, MAX_U64, MINIMUM_LIQUIDITY, NATIVE_TOKEN_SYMBOL,
    PROTOCOL_FEE_BPS,
};
pub use error::{QuoteError, Result};
pub use liquidity_math::{LiquidityMath, PoolState};
pub use math::{integer_sqrt, protocol_fee};
pub use pool_traits::{PoolRegistry, PoolStateProvider, UnavailableProvider};
pub use quote::{
    AddLiquidityQuote, AmountInQuote, AmountOutQuote, PriceImpact, QuoteOptions,
    RemoveLiquidityQuote, Slippage,
};
pub use quoter::SwapQuoter;
pub use swap_math::{ReservePair, SwapMath};
pub use token::{Token, TokenPair, TradingPath};

/// Common numeric types for quote inputs and outputs
pub use ethereum_types::{U256, U512};
pub use rust_decimal::Decimal;
