//! Token identities, pairs and two-hop trading paths
//!
//! Addresses are opaque strings; no chain-specific format check is made.

use crate::constants::NATIVE_TOKEN_SYMBOL;
use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tradeable asset: the chain's native coin or a PSP22 token contract
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Token {
    Native,
    Psp22(String),
}

impl Token {
    /// `"BHO"` is the native coin, anything else a contract address
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(QuoteError::InvalidTokenPair);
        }
        if value == NATIVE_TOKEN_SYMBOL {
            return Ok(Self::Native);
        }
        Ok(Self::Psp22(value.to_string()))
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }

    /// False for a `Psp22` that is blank or spells the native symbol, which
    /// would display and serialize as a different token
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::Native => true,
            Self::Psp22(address) => {
                let address = address.trim();
                !address.is_empty() && address != NATIVE_TOKEN_SYMBOL
            }
        }
    }
}

impl FromStr for Token {
    type Err = QuoteError;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Token {
    type Error = QuoteError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str(NATIVE_TOKEN_SYMBOL),
            Self::Psp22(address) => f.write_str(address),
        }
    }
}

/// Two distinct tokens in caller order (A, B)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenPair {
    token_a: Token,
    token_b: Token,
}

impl TokenPair {
    pub fn new(token_a: Token, token_b: Token) -> Result<Self> {
        if !token_a.is_well_formed() || !token_b.is_well_formed() || token_a == token_b {
            return Err(QuoteError::InvalidTokenPair);
        }
        Ok(Self { token_a, token_b })
    }

    pub fn token_a(&self) -> &Token {
        &self.token_a
    }

    pub fn token_b(&self) -> &Token {
        &self.token_b
    }

    /// Same pool with the sides swapped
    pub fn reversed(&self) -> Self {
        Self {
            token_a: self.token_b.clone(),
            token_b: self.token_a.clone(),
        }
    }

    /// Order-independent key: the pool for (A, B) is the pool for (B, A)
    pub fn sorted(&self) -> (Token, Token) {
        if self.token_a <= self.token_b {
            (self.token_a.clone(), self.token_b.clone())
        } else {
            (self.token_b.clone(), self.token_a.clone())
        }
    }

    /// True when the caller's order matches [`TokenPair::sorted`]
    pub fn is_sorted(&self) -> bool {
        self.token_a <= self.token_b
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token_a, self.token_b)
    }
}

/// Swap route; the SDK only trades directly between two tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingPath {
    pair: TokenPair,
}

impl TradingPath {
    pub fn new(tokens: Vec<Token>) -> Result<Self> {
        let [token_in, token_out]: [Token; 2] = tokens
            .try_into()
            .map_err(|_| QuoteError::InvalidTradingPath)?;
        let pair =
            TokenPair::new(token_in, token_out).map_err(|_| QuoteError::InvalidTradingPath)?;
        Ok(Self { pair })
    }

    /// Parse a path of addresses or `"BHO"`
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let tokens = tokens
            .iter()
            .map(|token| Token::parse(token.as_ref()).map_err(|_| QuoteError::InvalidTradingPath))
            .collect::<Result<Vec<_>>>()?;
        Self::new(tokens)
    }

    pub fn token_in(&self) -> &Token {
        self.pair.token_a()
    }

    pub fn token_out(&self) -> &Token {
        self.pair.token_b()
    }

    /// The pool this path trades through, oriented (in, out)
    pub fn pair(&self) -> &TokenPair {
        &self.pair
    }
}
