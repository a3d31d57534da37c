//! Liquidity-share quotes for adding to and removing from a pair

use crate::constants::MINIMUM_LIQUIDITY;
use crate::error::{
    QuoteError, Result, INSUFFICIENT_AMOUNT, INSUFFICIENT_LIQUIDITY_MINTED,
    MISSING_AMOUNTS, MISSING_INITIAL_AMOUNTS, SHARES_EXCEED_SUPPLY, ZERO_POOL_STATE,
    ZERO_REMOVE_INPUTS,
};
use crate::math::{integer_sqrt, mul_div, slippage_floor};
use crate::quote::{AddLiquidityQuote, RemoveLiquidityQuote, Slippage};
use ethereum_types::U256;
use tracing::{debug, trace};

/// Pool balances and outstanding LP shares, in pair order (A, B)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolState {
    pub reserve_a: U256,
    pub reserve_b: U256,
    pub shares_total_supply: U256,
}

impl PoolState {
    pub fn new(reserve_a: U256, reserve_b: U256, shares_total_supply: U256) -> Self {
        Self {
            reserve_a,
            reserve_b,
            shares_total_supply,
        }
    }

    /// No liquidity has ever been provided
    pub fn is_unseeded(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero() && self.shares_total_supply.is_zero()
    }

    /// Reserves and supply are all positive
    pub fn is_seeded(&self) -> bool {
        !self.reserve_a.is_zero() && !self.reserve_b.is_zero() && !self.shares_total_supply.is_zero()
    }

    /// Same pool with A and B swapped
    pub fn flipped(self) -> Self {
        Self::new(self.reserve_b, self.reserve_a, self.shares_total_supply)
    }
}

/// Which deposit amount drives a subsequent provision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    A,
    B,
}

/// LP share math
pub struct LiquidityMath;

impl LiquidityMath {
    /// Quote shares minted and deposit bounds for adding liquidity
    ///
    /// On an unseeded pool both amounts are required and set the price; the
    /// first `MINIMUM_LIQUIDITY` shares are burned. On a seeded pool the
    /// amount implying fewer shares wins (ties go to A) and the other side is
    /// derived from the pool ratio.
    pub fn add_liquidity_quote(
        amount_a: Option<U256>,
        amount_b: Option<U256>,
        pool: PoolState,
        slippage: Slippage,
    ) -> Result<AddLiquidityQuote> {
        if amount_a.is_some_and(|amount| amount.is_zero())
            || amount_b.is_some_and(|amount| amount.is_zero())
        {
            debug!("add liquidity rejected: zero amount");
            return Err(QuoteError::invariant(INSUFFICIENT_AMOUNT));
        }

        if pool.is_unseeded() {
            let (Some(amount_a), Some(amount_b)) = (amount_a, amount_b) else {
                debug!("add liquidity rejected: first provision needs both amounts");
                return Err(QuoteError::invariant(MISSING_INITIAL_AMOUNTS));
            };
            return Self::first_provision(amount_a, amount_b);
        }

        if !pool.is_seeded() {
            debug!(
                reserve_a = %pool.reserve_a,
                reserve_b = %pool.reserve_b,
                shares_total_supply = %pool.shares_total_supply,
                "add liquidity rejected: inconsistent pool state"
            );
            return Err(QuoteError::invariant(ZERO_POOL_STATE));
        }

        let (side, amount) = match (amount_a, amount_b) {
            (Some(amount_a), Some(amount_b)) => {
                let shares_a = Self::implied_shares(amount_a, pool.reserve_a, pool)?;
                let shares_b = Self::implied_shares(amount_b, pool.reserve_b, pool)?;
                if shares_a <= shares_b {
                    (Side::A, amount_a)
                } else {
                    (Side::B, amount_b)
                }
            }
            (Some(amount_a), None) => (Side::A, amount_a),
            (None, Some(amount_b)) => (Side::B, amount_b),
            (None, None) => {
                debug!("add liquidity rejected: no amounts");
                return Err(QuoteError::invariant(MISSING_AMOUNTS));
            }
        };

        // Orient so the chosen side is "A", then map back
        let oriented = match side {
            Side::A => pool,
            Side::B => pool.flipped(),
        };
        let shares = Self::implied_shares(amount, oriented.reserve_a, oriented)?;
        let other_desired = mul_div(
            amount,
            oriented.reserve_b,
            oriented.reserve_a,
            "add liquidity other amount",
        )?;
        let amount_min = slippage_floor(amount, slippage)?;
        let other_min = slippage_floor(other_desired, slippage)?;

        let quote = match side {
            Side::A => AddLiquidityQuote {
                shares_amount_received: shares,
                shares_amount_burned: U256::zero(),
                amount_a_desired: amount,
                amount_b_desired: other_desired,
                amount_a_min: amount_min,
                amount_b_min: other_min,
            },
            Side::B => AddLiquidityQuote {
                shares_amount_received: shares,
                shares_amount_burned: U256::zero(),
                amount_a_desired: other_desired,
                amount_b_desired: amount,
                amount_a_min: other_min,
                amount_b_min: amount_min,
            },
        };

        trace!(
            chosen = ?side,
            shares = %quote.shares_amount_received,
            amount_a = %quote.amount_a_desired,
            amount_b = %quote.amount_b_desired,
            "quoted add liquidity"
        );
        Ok(quote)
    }

    /// Quote token amounts returned for burning `shares_amount` LP shares
    pub fn remove_liquidity_quote(
        shares_amount: U256,
        pool: PoolState,
        slippage: Slippage,
    ) -> Result<RemoveLiquidityQuote> {
        if shares_amount.is_zero() || !pool.is_seeded() {
            debug!(
                %shares_amount,
                shares_total_supply = %pool.shares_total_supply,
                "remove liquidity rejected: zero input"
            );
            return Err(QuoteError::invariant(ZERO_REMOVE_INPUTS));
        }
        if shares_amount > pool.shares_total_supply {
            debug!(
                %shares_amount,
                shares_total_supply = %pool.shares_total_supply,
                "remove liquidity rejected: shares exceed supply"
            );
            return Err(QuoteError::invariant(SHARES_EXCEED_SUPPLY));
        }

        let amount_a_received = mul_div(
            shares_amount,
            pool.reserve_a,
            pool.shares_total_supply,
            "remove liquidity amount A",
        )?;
        let amount_b_received = mul_div(
            shares_amount,
            pool.reserve_b,
            pool.shares_total_supply,
            "remove liquidity amount B",
        )?;

        Ok(RemoveLiquidityQuote {
            amount_a_received,
            amount_b_received,
            amount_a_min: slippage_floor(amount_a_received, slippage)?,
            amount_b_min: slippage_floor(amount_b_received, slippage)?,
        })
    }

    fn first_provision(amount_a: U256, amount_b: U256) -> Result<AddLiquidityQuote> {
        let product = amount_a
            .checked_mul(amount_b)
            .ok_or_else(|| QuoteError::overflow("initial liquidity product"))?;
        let minted = integer_sqrt(product);
        let minimum = U256::from(MINIMUM_LIQUIDITY);
        if minted <= minimum {
            debug!(%minted, "add liquidity rejected: minted shares do not exceed minimum liquidity");
            return Err(QuoteError::invariant(INSUFFICIENT_LIQUIDITY_MINTED));
        }

        trace!(%minted, "quoted first liquidity provision");
        // The first provider sets the price, so no slippage bounds apply
        Ok(AddLiquidityQuote {
            shares_amount_received: minted - minimum,
            shares_amount_burned: minimum,
            amount_a_desired: amount_a,
            amount_b_desired: amount_b,
            amount_a_min: amount_a,
            amount_b_min: amount_b,
        })
    }

    fn implied_shares(amount: U256, reserve: U256, pool: PoolState) -> Result<U256> {
        mul_div(amount, pool.shares_total_supply, reserve, "implied shares")
    }
}
