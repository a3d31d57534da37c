//! Constant-product swap quotes
//!
//! Exact integer arithmetic matching the pair contract: the 0.3% trading fee
//! is applied as a 997/1000 multiplier on the input, divisions truncate, and
//! the exact-output direction rounds its input up by one unit.

use crate::constants::{FEE_DENOMINATOR, FEE_NUMERATOR};
use crate::error::{QuoteError, Result, INSUFFICIENT_LIQUIDITY, INSUFFICIENT_OUTPUT_AMOUNT};
use crate::math::{full_mul, narrow, protocol_fee, slippage_ceiling, slippage_floor, widen};
use crate::quote::{AmountInQuote, AmountOutQuote, PriceImpact, Slippage};
use ethereum_types::{U256, U512};
use tracing::{debug, trace};

/// Pool reserves oriented in trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservePair {
    pub reserve_in: U256,
    pub reserve_out: U256,
}

impl ReservePair {
    pub fn new(reserve_in: U256, reserve_out: U256) -> Self {
        Self {
            reserve_in,
            reserve_out,
        }
    }

    /// Same pool seen from the other side
    pub fn flipped(self) -> Self {
        Self::new(self.reserve_out, self.reserve_in)
    }

    fn ensure_liquidity(&self) -> Result<()> {
        if self.reserve_in.is_zero() || self.reserve_out.is_zero() {
            debug!(
                reserve_in = %self.reserve_in,
                reserve_out = %self.reserve_out,
                "quote rejected: empty reserve"
            );
            return Err(QuoteError::invariant(INSUFFICIENT_LIQUIDITY));
        }
        Ok(())
    }
}

/// Constant-product swap math
pub struct SwapMath;

impl SwapMath {
    /// Quote the output for an exact input amount
    ///
    /// ```text
    /// amount_out = amount_in * 997 * reserve_out / (reserve_in * 1000 + amount_in * 997)
    /// ```
    pub fn amount_out(
        amount_in: U256,
        reserves: ReservePair,
        slippage: Slippage,
    ) -> Result<AmountOutQuote> {
        if amount_in.is_zero() {
            debug!("quote rejected: zero input amount");
            return Err(QuoteError::invariant(INSUFFICIENT_OUTPUT_AMOUNT));
        }
        reserves.ensure_liquidity()?;

        let amount_in_with_fee = full_mul(amount_in, U256::from(FEE_NUMERATOR));
        let numerator = amount_in_with_fee
            .checked_mul(widen(reserves.reserve_out))
            .ok_or_else(|| QuoteError::overflow("amount_out numerator"))?;
        let denominator = full_mul(reserves.reserve_in, U256::from(FEE_DENOMINATOR))
            .checked_add(amount_in_with_fee)
            .ok_or_else(|| QuoteError::overflow("amount_out denominator"))?;

        // Always below reserve_out, so narrowing cannot fail
        let amount_out = narrow(numerator / denominator, "amount_out")?;
        let amount_out_min = slippage_floor(amount_out, slippage)?;
        let fee = protocol_fee(amount_in);
        let price_impact = Self::price_impact(reserves, amount_in, amount_out);

        trace!(
            %amount_in,
            %amount_out,
            %amount_out_min,
            %fee,
            slippage = %slippage,
            "quoted exact-input swap"
        );

        Ok(AmountOutQuote {
            amount_out,
            amount_out_min,
            fee,
            price_impact,
        })
    }

    /// Quote the input required for an exact output amount
    ///
    /// ```text
    /// amount_in = reserve_in * amount_out * 1000 / ((reserve_out - amount_out) * 997) + 1
    /// ```
    pub fn amount_in(
        amount_out: U256,
        reserves: ReservePair,
        slippage: Slippage,
    ) -> Result<AmountInQuote> {
        if amount_out.is_zero() {
            debug!("quote rejected: zero output amount");
            return Err(QuoteError::invariant(INSUFFICIENT_OUTPUT_AMOUNT));
        }
        reserves.ensure_liquidity()?;
        if amount_out >= reserves.reserve_out {
            debug!(
                %amount_out,
                reserve_out = %reserves.reserve_out,
                "quote rejected: output drains reserve"
            );
            return Err(QuoteError::invariant(INSUFFICIENT_LIQUIDITY));
        }

        let numerator = full_mul(reserves.reserve_in, amount_out)
            .checked_mul(U512::from(FEE_DENOMINATOR))
            .ok_or_else(|| QuoteError::overflow("amount_in numerator"))?;
        let denominator = full_mul(reserves.reserve_out - amount_out, U256::from(FEE_NUMERATOR));

        let amount_in = narrow(numerator / denominator, "amount_in")?
            .checked_add(U256::one())
            .ok_or_else(|| QuoteError::overflow("amount_in"))?;
        let amount_in_max = slippage_ceiling(amount_in, slippage)?;
        let fee = protocol_fee(amount_in);
        let price_impact = Self::price_impact(reserves, amount_in, amount_out);

        trace!(
            %amount_in,
            %amount_in_max,
            %amount_out,
            %fee,
            slippage = %slippage,
            "quoted exact-output swap"
        );

        Ok(AmountInQuote {
            amount_in,
            amount_in_max,
            fee,
            price_impact,
        })
    }

    /// Price impact of a trade as an unreduced fraction
    ///
    /// `(reserve_out * amount_in - reserve_in * amount_out) / (reserve_out * amount_in)`
    pub fn price_impact(reserves: ReservePair, amount_in: U256, amount_out: U256) -> PriceImpact {
        let spot_value = full_mul(reserves.reserve_out, amount_in);
        let executed_value = full_mul(reserves.reserve_in, amount_out);

        if spot_value.is_zero() {
            return PriceImpact::zero_with_denominator(U256::zero());
        }

        let (numerator, negative) = if spot_value >= executed_value {
            (spot_value - executed_value, false)
        } else {
            (executed_value - spot_value, true)
        };

        PriceImpact {
            numerator,
            denominator: spot_value,
            negative,
        }
    }
}
