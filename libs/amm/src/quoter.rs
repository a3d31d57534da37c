//! SDK-facing quote surface
//!
//! [`SwapQuoter`] carries the caller's default slippage and exposes the
//! quoting operations of the swap SDK, either against explicit reserves or
//! against a [`PoolStateProvider`] for a validated pair or path.

use crate::error::Result;
use crate::liquidity_math::{LiquidityMath, PoolState};
use crate::math::protocol_fee;
use crate::pool_traits::PoolStateProvider;
use crate::quote::{
    AddLiquidityQuote, AmountInQuote, AmountOutQuote, QuoteOptions, RemoveLiquidityQuote,
    Slippage,
};
use crate::swap_math::{ReservePair, SwapMath};
use crate::token::{TokenPair, TradingPath};
use ethereum_types::U256;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapQuoter {
    default_slippage: Slippage,
}

impl SwapQuoter {
    pub fn new(default_slippage: Slippage) -> Self {
        Self { default_slippage }
    }

    pub fn default_slippage(&self) -> Slippage {
        self.default_slippage
    }

    fn slippage(&self, options: QuoteOptions) -> Slippage {
        options.slippage.unwrap_or(self.default_slippage)
    }

    pub fn get_amount_out(
        &self,
        amount_in: U256,
        reserve_in: U256,
        reserve_out: U256,
        options: QuoteOptions,
    ) -> Result<AmountOutQuote> {
        SwapMath::amount_out(
            amount_in,
            ReservePair::new(reserve_in, reserve_out),
            self.slippage(options),
        )
    }

    pub fn get_amount_in(
        &self,
        amount_out: U256,
        reserve_in: U256,
        reserve_out: U256,
        options: QuoteOptions,
    ) -> Result<AmountInQuote> {
        SwapMath::amount_in(
            amount_out,
            ReservePair::new(reserve_in, reserve_out),
            self.slippage(options),
        )
    }

    pub fn get_add_liquidity_info(
        &self,
        amount_a: Option<U256>,
        amount_b: Option<U256>,
        reserve_a: U256,
        reserve_b: U256,
        shares_total_supply: U256,
        options: QuoteOptions,
    ) -> Result<AddLiquidityQuote> {
        LiquidityMath::add_liquidity_quote(
            amount_a,
            amount_b,
            PoolState::new(reserve_a, reserve_b, shares_total_supply),
            self.slippage(options),
        )
    }

    pub fn get_remove_liquidity_info(
        &self,
        shares_amount: U256,
        shares_total_supply: U256,
        reserve_a: U256,
        reserve_b: U256,
        options: QuoteOptions,
    ) -> Result<RemoveLiquidityQuote> {
        LiquidityMath::remove_liquidity_quote(
            shares_amount,
            PoolState::new(reserve_a, reserve_b, shares_total_supply),
            self.slippage(options),
        )
    }

    pub fn get_protocol_fee(&self, amount_in: U256) -> U256 {
        protocol_fee(amount_in)
    }

    /// Exact-input quote along a two-token path, reading live reserves
    pub fn quote_exact_input<P: PoolStateProvider>(
        &self,
        provider: &P,
        path: &TradingPath,
        amount_in: U256,
        options: QuoteOptions,
    ) -> Result<AmountOutQuote> {
        let (reserve_in, reserve_out) = provider.reserves(path.pair())?;
        debug!(
            token_in = %path.token_in(),
            token_out = %path.token_out(),
            %reserve_in,
            %reserve_out,
            "quoting exact input"
        );
        self.get_amount_out(amount_in, reserve_in, reserve_out, options)
    }

    /// Exact-output quote along a two-token path, reading live reserves
    pub fn quote_exact_output<P: PoolStateProvider>(
        &self,
        provider: &P,
        path: &TradingPath,
        amount_out: U256,
        options: QuoteOptions,
    ) -> Result<AmountInQuote> {
        let (reserve_in, reserve_out) = provider.reserves(path.pair())?;
        debug!(
            token_in = %path.token_in(),
            token_out = %path.token_out(),
            %reserve_in,
            %reserve_out,
            "quoting exact output"
        );
        self.get_amount_in(amount_out, reserve_in, reserve_out, options)
    }

    pub fn quote_add_liquidity<P: PoolStateProvider>(
        &self,
        provider: &P,
        pair: &TokenPair,
        amount_a: Option<U256>,
        amount_b: Option<U256>,
        options: QuoteOptions,
    ) -> Result<AddLiquidityQuote> {
        let pool = provider.pool_state(pair)?;
        debug!(%pair, ?pool, "quoting add liquidity");
        LiquidityMath::add_liquidity_quote(amount_a, amount_b, pool, self.slippage(options))
    }

    pub fn quote_remove_liquidity<P: PoolStateProvider>(
        &self,
        provider: &P,
        pair: &TokenPair,
        shares_amount: U256,
        options: QuoteOptions,
    ) -> Result<RemoveLiquidityQuote> {
        let pool = provider.pool_state(pair)?;
        debug!(%pair, ?pool, "quoting remove liquidity");
        LiquidityMath::remove_liquidity_quote(shares_amount, pool, self.slippage(options))
    }
}
