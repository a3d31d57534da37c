//! Wide-integer helpers shared by the swap and liquidity math
//!
//! Every product of two `U256` values is taken in `U512`, where it cannot
//! overflow, and narrowed back only once the final (truncating) division
//! has been applied.

use crate::constants::{BPS_DENOMINATOR, PROTOCOL_FEE_BPS};
use crate::error::{QuoteError, Result};
use crate::quote::Slippage;
use ethereum_types::{U256, U512};

const DIVISION_BY_ZERO: &str = "Division by zero";

pub(crate) fn widen(value: U256) -> U512 {
    let U256(ref words) = value;
    U512([words[0], words[1], words[2], words[3], 0, 0, 0, 0])
}

pub(crate) fn narrow(value: U512, operation: &'static str) -> Result<U256> {
    let U512(ref words) = value;
    if words[4..].iter().any(|word| *word != 0) {
        return Err(QuoteError::overflow(operation));
    }
    Ok(U256([words[0], words[1], words[2], words[3]]))
}

/// Full 512-bit product of two 256-bit values
pub(crate) fn full_mul(a: U256, b: U256) -> U512 {
    widen(a) * widen(b)
}

/// `a * b / denominator` with a 512-bit intermediate, truncating
pub(crate) fn mul_div(
    a: U256,
    b: U256,
    denominator: U256,
    operation: &'static str,
) -> Result<U256> {
    if denominator.is_zero() {
        return Err(QuoteError::invariant(DIVISION_BY_ZERO));
    }
    narrow(full_mul(a, b) / widen(denominator), operation)
}

/// `amount - amount * slippage / 10000`
pub(crate) fn slippage_floor(amount: U256, slippage: Slippage) -> Result<U256> {
    let cut = mul_div(
        amount,
        U256::from(slippage.bps()),
        U256::from(BPS_DENOMINATOR),
        "slippage floor",
    )?;
    // slippage is capped at 100%, so cut <= amount
    Ok(amount - cut)
}

/// `amount + amount * slippage / 10000`
pub(crate) fn slippage_ceiling(amount: U256, slippage: Slippage) -> Result<U256> {
    let cut = mul_div(
        amount,
        U256::from(slippage.bps()),
        U256::from(BPS_DENOMINATOR),
        "slippage ceiling",
    )?;
    amount
        .checked_add(cut)
        .ok_or_else(|| QuoteError::overflow("slippage ceiling"))
}

/// Protocol fee charged on a swap input: `amount * 30 / 10000`, truncating
///
/// Split into quotient and remainder so the product never leaves 256 bits.
pub fn protocol_fee(amount: U256) -> U256 {
    let bps = U256::from(BPS_DENOMINATOR);
    let fee = U256::from(PROTOCOL_FEE_BPS);
    let (quotient, remainder) = amount.div_mod(bps);
    quotient * fee + remainder * fee / bps
}

/// Integer square root by Newton's iteration
///
/// Rounds down, and follows the iteration the pair contract runs so minted
/// share amounts agree with on-chain execution to the unit.
pub fn integer_sqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::zero();
    }
    if n <= U256::from(3u64) {
        return U256::one();
    }

    let two = U256::from(2u64);
    let mut z = n;
    let mut x = n / two + U256::one();
    while x < z {
        z = x;
        x = (n / x + x) / two;
    }
    z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_sqrt_small_values() {
        let expected = [0u64, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (n, root) in expected.iter().enumerate() {
            assert_eq!(
                integer_sqrt(U256::from(n as u64)),
                U256::from(*root),
                "sqrt({n})"
            );
        }
    }

    #[test]
    fn test_integer_sqrt_perfect_squares() {
        assert_eq!(integer_sqrt(U256::from(1_000_000u64)), U256::from(1_000u64));
        assert_eq!(integer_sqrt(U256::from(4_000_000u64)), U256::from(2_000u64));
        let big = U256::from(10u64).pow(U256::from(36u64));
        assert_eq!(integer_sqrt(big), U256::from(10u64).pow(U256::from(18u64)));
    }

    #[test]
    fn test_integer_sqrt_of_max() {
        let root = integer_sqrt(U256::MAX);
        assert_eq!(root, U256::from(u128::MAX));
    }

    #[test]
    fn test_protocol_fee() {
        assert_eq!(protocol_fee(U256::from(10_000u64)), U256::from(30u64));
        assert_eq!(protocol_fee(U256::from(1_000u64)), U256::from(3u64));
        assert_eq!(protocol_fee(U256::from(333u64)), U256::zero());
        assert_eq!(protocol_fee(U256::from(334u64)), U256::from(1u64));
        assert_eq!(protocol_fee(U256::zero()), U256::zero());
    }

    #[test]
    fn test_protocol_fee_matches_wide_formula() {
        for amount in [U256::MAX, U256::from(u128::MAX), U256::from(123_456_789u64)] {
            let wide = full_mul(amount, U256::from(30u64)) / widen(U256::from(10_000u64));
            assert_eq!(widen(protocol_fee(amount)), wide);
        }
    }

    #[test]
    fn test_mul_div_uses_wide_intermediate() {
        let result = mul_div(U256::MAX, U256::from(4u64), U256::from(8u64), "test").unwrap();
        assert_eq!(result, U256::MAX / U256::from(2u64));
    }

    #[test]
    fn test_mul_div_overflow_and_zero_denominator() {
        let err = mul_div(U256::MAX, U256::MAX, U256::one(), "test").unwrap_err();
        assert_eq!(err, QuoteError::overflow("test"));

        let err = mul_div(U256::one(), U256::one(), U256::zero(), "test").unwrap_err();
        assert!(err.is_invariant());
    }

    #[test]
    fn test_slippage_bounds() {
        let amount = U256::from(10_000u64);
        let one_percent = Slippage::from_bps(100).unwrap();
        assert_eq!(slippage_floor(amount, one_percent).unwrap(), U256::from(9_900u64));
        assert_eq!(slippage_ceiling(amount, one_percent).unwrap(), U256::from(10_100u64));

        let full = Slippage::from_bps(10_000).unwrap();
        assert_eq!(slippage_floor(amount, full).unwrap(), U256::zero());

        assert!(slippage_ceiling(U256::MAX, full).is_err());
    }

    #[test]
    fn test_narrow_round_trip() {
        let value = U256::from(u128::MAX) * U256::from(7u64);
        assert_eq!(narrow(widen(value), "test").unwrap(), value);
        assert!(narrow(widen(U256::MAX) + U512::one(), "test").is_err());
    }
}
