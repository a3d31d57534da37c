//! Quote error types
//!
//! Every fallible quote returns `Result<T, QuoteError>`. Invariant violations
//! are caller misuse (quoting against an empty pool, zero amounts) and are
//! never retried.

use thiserror::Error;

pub const INSUFFICIENT_OUTPUT_AMOUNT: &str = "Insufficient output amount";
pub const INSUFFICIENT_LIQUIDITY: &str = "Insufficient liquidity";
pub const INSUFFICIENT_AMOUNT: &str = "Insufficient amount";
pub const INSUFFICIENT_LIQUIDITY_MINTED: &str = "Insufficient liquidity minted";
pub const MISSING_AMOUNTS: &str = "Amount A or amount B must be provided";
pub const MISSING_INITIAL_AMOUNTS: &str =
    "Amount A and amount B must both be provided for the first liquidity provision";
pub const ZERO_POOL_STATE: &str = "Reserves or Shares total supply must not be zero";
pub const ZERO_REMOVE_INPUTS: &str = "Shares/Shares total supply/Reserves must not be zero";
pub const SHARES_EXCEED_SUPPLY: &str = "Shares amount must not exceed shares total supply";
pub const SLIPPAGE_TOO_LARGE: &str = "Slippage must not exceed 10000 basis points";

/// Errors produced by the quote engine and its helpers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// A precondition on the sign or non-zeroness of an input was violated
    #[error("Invariant error: {message}")]
    Invariant { message: &'static str },

    /// Both sides of a pair refer to the same token
    #[error("Invalid token pair")]
    InvalidTokenPair,

    /// Trading path is not exactly two distinct tokens
    #[error("Invalid trading path")]
    InvalidTradingPath,

    /// Intermediate or final value does not fit the integer width
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    /// Pool state could not be obtained from the provider
    #[error("Pool state provider error: {message}")]
    Provider { message: String },
}

impl QuoteError {
    pub(crate) fn invariant(message: &'static str) -> Self {
        Self::Invariant { message }
    }

    pub(crate) fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    /// Build a provider error from any displayable failure
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    /// True for the invariant-violation kind
    pub fn is_invariant(&self) -> bool {
        matches!(self, Self::Invariant { .. })
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
