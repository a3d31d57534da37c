//! Default configuration values
//!
//! Protocol constants (fee ratio, minimum liquidity) are not configurable
//! and live in `bho_swap_amm::constants`.

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "bho-swap.toml";

/// Environment variable prefix, e.g. `BHO_SWAP_QUOTE__DEFAULT_SLIPPAGE_BPS`
pub const ENV_PREFIX: &str = "BHO_SWAP";

/// Nested key separator in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Exact bounds unless configured, same as `SwapQuoter::default()`
pub const DEFAULT_SLIPPAGE_BPS: u32 = 0;

pub const DEFAULT_LOG_LEVEL: &str = "info";
