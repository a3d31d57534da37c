//! Protocol constants shared with the on-chain pair and router contracts

use ethereum_types::U256;

/// Shares permanently locked by the first liquidity provision
pub const MINIMUM_LIQUIDITY: u64 = 1_000;

/// Swap input multiplier after the 0.3% trading fee (997 / 1000)
pub const FEE_NUMERATOR: u64 = 997;
pub const FEE_DENOMINATOR: u64 = 1_000;

/// Protocol fee in basis points, charged on the input asset
pub const PROTOCOL_FEE_BPS: u64 = 30;

/// 1 bp = 0.01%
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Largest accepted slippage tolerance (100%)
pub const MAX_SLIPPAGE_BPS: u32 = 10_000;

/// Symbol accepted in place of a contract address for the native asset
pub const NATIVE_TOKEN_SYMBOL: &str = "BHO";

pub const MAX_U64: U256 = U256([u64::MAX, 0, 0, 0]);
pub const MAX_U128: U256 = U256([u64::MAX, u64::MAX, 0, 0]);
