//! Quote value types returned by the engine
//!
//! All of these are built, returned and dropped within a single call.

use crate::constants::MAX_SLIPPAGE_BPS;
use crate::error::{QuoteError, Result, SLIPPAGE_TOO_LARGE};
use crate::math::widen;
use ethereum_types::{U256, U512};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slippage tolerance in basis points (1 bp = 0.01%)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Slippage(u32);

impl Slippage {
    pub const ZERO: Slippage = Slippage(0);

    pub fn from_bps(bps: u32) -> Result<Self> {
        if bps > MAX_SLIPPAGE_BPS {
            return Err(QuoteError::invariant(SLIPPAGE_TOO_LARGE));
        }
        Ok(Self(bps))
    }

    pub fn bps(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Slippage {
    type Error = QuoteError;

    fn try_from(bps: u32) -> Result<Self> {
        Self::from_bps(bps)
    }
}

impl From<Slippage> for u32 {
    fn from(slippage: Slippage) -> Self {
        slippage.0
    }
}

impl fmt::Display for Slippage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bps", self.0)
    }
}

/// Per-call options; unset fields fall back to the quoter defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteOptions {
    pub slippage: Option<Slippage>,
}

impl QuoteOptions {
    pub fn with_slippage(slippage: Slippage) -> Self {
        Self {
            slippage: Some(slippage),
        }
    }
}

/// Unreduced price-impact fraction with a signed numerator
///
/// `numerator = reserve_out * amount_in - reserve_in * amount_out`,
/// `denominator = reserve_out * amount_in`. Both are kept at 512 bits so the
/// products are exact for any pair of 256-bit inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceImpact {
    #[serde(with = "crate::amount_serde")]
    pub numerator: U512,
    #[serde(with = "crate::amount_serde")]
    pub denominator: U512,
    pub negative: bool,
}

impl PriceImpact {
    pub fn is_negative(&self) -> bool {
        self.negative && !self.numerator.is_zero()
    }

    /// Impact in basis points, truncated toward zero; `None` when undefined
    pub fn as_bps(&self) -> Option<U512> {
        if self.denominator.is_zero() {
            return None;
        }
        let scaled = self.numerator.checked_mul(U512::from(10_000u64))?;
        Some(scaled / self.denominator)
    }

    /// Impact as a percentage with four decimal places
    pub fn as_percent(&self) -> Option<Decimal> {
        if self.denominator.is_zero() {
            return None;
        }
        let scaled = self.numerator.checked_mul(U512::from(1_000_000u64))? / self.denominator;
        if scaled > U512::from(i64::MAX as u64) {
            return None;
        }
        let magnitude = Decimal::new(scaled.low_u64() as i64, 4);
        Some(if self.is_negative() { -magnitude } else { magnitude })
    }

    pub(crate) fn zero_with_denominator(denominator: U256) -> Self {
        Self {
            numerator: U512::zero(),
            denominator: widen(denominator),
            negative: false,
        }
    }
}

/// Exact-input swap quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountOutQuote {
    #[serde(with = "crate::amount_serde")]
    pub amount_out: U256,
    #[serde(with = "crate::amount_serde")]
    pub amount_out_min: U256,
    #[serde(with = "crate::amount_serde")]
    pub fee: U256,
    pub price_impact: PriceImpact,
}

/// Exact-output swap quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountInQuote {
    #[serde(with = "crate::amount_serde")]
    pub amount_in: U256,
    #[serde(with = "crate::amount_serde")]
    pub amount_in_max: U256,
    #[serde(with = "crate::amount_serde")]
    pub fee: U256,
    pub price_impact: PriceImpact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLiquidityQuote {
    #[serde(with = "crate::amount_serde")]
    pub shares_amount_received: U256,
    #[serde(with = "crate::amount_serde")]
    pub shares_amount_burned: U256,
    #[serde(with = "crate::amount_serde")]
    pub amount_a_desired: U256,
    #[serde(with = "crate::amount_serde")]
    pub amount_b_desired: U256,
    #[serde(with = "crate::amount_serde")]
    pub amount_a_min: U256,
    #[serde(with = "crate::amount_serde")]
    pub amount_b_min: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveLiquidityQuote {
    #[serde(with = "crate::amount_serde")]
    pub amount_a_received: U256,
    #[serde(with = "crate::amount_serde")]
    pub amount_b_received: U256,
    #[serde(with = "crate::amount_serde")]
    pub amount_a_min: U256,
    #[serde(with = "crate::amount_serde")]
    pub amount_b_min: U256,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_slippage_bounds() {
        assert_eq!(Slippage::from_bps(0).unwrap(), Slippage::ZERO);
        assert_eq!(Slippage::from_bps(10_000).unwrap().bps(), 10_000);
        let err = Slippage::from_bps(10_001).unwrap_err();
        assert_eq!(err, QuoteError::invariant(SLIPPAGE_TOO_LARGE));
        assert_eq!(Slippage::default(), Slippage::ZERO);
    }

    #[test]
    fn test_slippage_serde() {
        let slippage: Slippage = serde_json::from_str("50").unwrap();
        assert_eq!(slippage.bps(), 50);
        assert!(serde_json::from_str::<Slippage>("20000").is_err());
        assert_eq!(serde_json::to_string(&slippage).unwrap(), "50");
    }

    #[test]
    fn test_price_impact_rendering() {
        let impact = PriceImpact {
            numerator: U512::from(25u64),
            denominator: U512::from(1_000u64),
            negative: false,
        };
        assert_eq!(impact.as_bps(), Some(U512::from(250u64)));
        assert_eq!(impact.as_percent(), Some(dec!(2.5)));

        let negative = PriceImpact {
            negative: true,
            ..impact
        };
        assert!(negative.is_negative());
        assert_eq!(negative.as_percent(), Some(dec!(-2.5)));

        let undefined = PriceImpact::zero_with_denominator(U256::zero());
        assert_eq!(undefined.as_bps(), None);
        assert_eq!(undefined.as_percent(), None);
        assert!(!undefined.is_negative());
    }

    #[test]
    fn test_quote_json_uses_camel_case_decimal_strings() {
        let quote = RemoveLiquidityQuote {
            amount_a_received: U256::from(5_000u64),
            amount_b_received: U256::from(10_000u64),
            amount_a_min: U256::from(4_950u64),
            amount_b_min: U256::from(9_900u64),
        };
        let json = serde_json::to_value(quote).unwrap();
        assert_eq!(json["amountAReceived"], "5000");
        assert_eq!(json["amountBMin"], "9900");
    }
}
