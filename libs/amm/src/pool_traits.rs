//! Pool-state provider interface
//!
//! The quote engine never talks to a node. Whatever fetches reserves and LP
//! supply (a contract query client, a cache, a test fixture) sits behind
//! [`PoolStateProvider`].

use crate::error::{QuoteError, Result};
use crate::liquidity_math::PoolState;
use crate::token::{Token, TokenPair};
use ethereum_types::U256;
use std::collections::HashMap;
use tracing::debug;

/// Source of reserves and share supply for a token pair
pub trait PoolStateProvider {
    /// Reserves oriented to the pair order: `(reserve_a, reserve_b)`
    fn reserves(&self, pair: &TokenPair) -> Result<(U256, U256)>;

    /// Outstanding LP shares of the pair's pool
    fn shares_total_supply(&self, pair: &TokenPair) -> Result<U256>;

    /// Full snapshot in pair order
    fn pool_state(&self, pair: &TokenPair) -> Result<PoolState> {
        let (reserve_a, reserve_b) = self.reserves(pair)?;
        let shares_total_supply = self.shares_total_supply(pair)?;
        Ok(PoolState::new(reserve_a, reserve_b, shares_total_supply))
    }
}

impl<P: PoolStateProvider + ?Sized> PoolStateProvider for &P {
    fn reserves(&self, pair: &TokenPair) -> Result<(U256, U256)> {
        (**self).reserves(pair)
    }

    fn shares_total_supply(&self, pair: &TokenPair) -> Result<U256> {
        (**self).shares_total_supply(pair)
    }
}

/// In-memory pool table keyed by unordered pair
///
/// A pool that was never registered reads as empty, the same as a pair the
/// factory has not deployed liquidity into.
#[derive(Debug, Clone, Default)]
pub struct PoolRegistry {
    pools: HashMap<(Token, Token), PoolState>,
}

impl PoolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pool snapshot given in `pair` order
    pub fn insert(&mut self, pair: &TokenPair, state: PoolState) {
        let stored = if pair.is_sorted() { state } else { state.flipped() };
        self.pools.insert(pair.sorted(), stored);
    }

    pub fn remove(&mut self, pair: &TokenPair) -> Option<PoolState> {
        let stored = self.pools.remove(&pair.sorted())?;
        Some(if pair.is_sorted() { stored } else { stored.flipped() })
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    fn lookup(&self, pair: &TokenPair) -> PoolState {
        match self.pools.get(&pair.sorted()) {
            Some(stored) if pair.is_sorted() => *stored,
            Some(stored) => stored.flipped(),
            None => {
                debug!(%pair, "no pool registered, reading as empty");
                PoolState::default()
            }
        }
    }
}

impl PoolStateProvider for PoolRegistry {
    fn reserves(&self, pair: &TokenPair) -> Result<(U256, U256)> {
        let state = self.lookup(pair);
        Ok((state.reserve_a, state.reserve_b))
    }

    fn shares_total_supply(&self, pair: &TokenPair) -> Result<U256> {
        Ok(self.lookup(pair).shares_total_supply)
    }

    fn pool_state(&self, pair: &TokenPair) -> Result<PoolState> {
        Ok(self.lookup(pair))
    }
}

/// Provider that always fails; stands in for an unreachable node
#[derive(Debug, Clone)]
pub struct UnavailableProvider {
    pub reason: String,
}

impl PoolStateProvider for UnavailableProvider {
    fn reserves(&self, _pair: &TokenPair) -> Result<(U256, U256)> {
        Err(QuoteError::provider(self.reason.clone()))
    }

    fn shares_total_supply(&self, _pair: &TokenPair) -> Result<U256> {
        Err(QuoteError::provider(self.reason.clone()))
    }
}
