//! Reference scenarios for the SDK quote surface

use bho_swap_amm::{
    PoolRegistry, PoolState, QuoteError, QuoteOptions, Slippage, SwapMath, SwapQuoter, Token,
    TokenPair, TradingPath, ReservePair, U256,
};

fn u(value: u64) -> U256 {
    U256::from(value)
}

fn with_slippage(bps: u32) -> QuoteOptions {
    QuoteOptions::with_slippage(Slippage::from_bps(bps).unwrap())
}

#[test]
fn swap_quote_matches_reference() {
    let quote = SwapQuoter::default()
        .get_amount_out(u(1_000), u(1_000_000), u(2_000_000), with_slippage(0))
        .unwrap();

    assert_eq!(quote.amount_out, u(1_992));
    assert_eq!(quote.amount_out_min, u(1_992));
    assert_eq!(quote.fee, u(3));
}

#[test]
fn round_trip_recovers_input_in_reference_pool() {
    let quoter = SwapQuoter::default();
    let out = quoter
        .get_amount_out(u(1_000), u(1_000_000), u(2_000_000), QuoteOptions::default())
        .unwrap();
    let back = quoter
        .get_amount_in(out.amount_out, u(1_000_000), u(2_000_000), QuoteOptions::default())
        .unwrap();
    assert!(back.amount_in >= u(1_000));
}

#[test]
fn coarse_output_round_trip_quotes_minimal_input() {
    // 1500 and 1005 both buy a single unit; the exact-output quote finds the cheaper one
    let reserves = ReservePair::new(u(1_000_000), u(1_000));
    let out = SwapMath::amount_out(u(1_500), reserves, Slippage::ZERO).unwrap();
    assert_eq!(out.amount_out, u(1));

    let back = SwapMath::amount_in(out.amount_out, reserves, Slippage::ZERO).unwrap();
    assert_eq!(back.amount_in, u(1_005));
    let delivered = SwapMath::amount_out(back.amount_in, reserves, Slippage::ZERO).unwrap();
    assert_eq!(delivered.amount_out, u(1));
}

#[test]
fn remove_liquidity_matches_reference() {
    let quote = SwapQuoter::default()
        .get_remove_liquidity_info(u(500), u(1_000), u(10_000), u(20_000), with_slippage(100))
        .unwrap();

    assert_eq!(quote.amount_a_received, u(5_000));
    assert_eq!(quote.amount_b_received, u(10_000));
    assert_eq!(quote.amount_a_min, u(4_950));
    assert_eq!(quote.amount_b_min, u(9_900));
}

#[test]
fn first_liquidity_boundary() {
    let quoter = SwapQuoter::default();

    let err = quoter
        .get_add_liquidity_info(
            Some(u(1_000)),
            Some(u(1_000)),
            U256::zero(),
            U256::zero(),
            U256::zero(),
            QuoteOptions::default(),
        )
        .unwrap_err();
    assert!(err.is_invariant());

    let quote = quoter
        .get_add_liquidity_info(
            Some(u(2_000)),
            Some(u(2_000)),
            U256::zero(),
            U256::zero(),
            U256::zero(),
            QuoteOptions::default(),
        )
        .unwrap();
    assert_eq!(quote.shares_amount_received, u(1_000));
    assert_eq!(quote.shares_amount_burned, u(1_000));
}

#[test]
fn protocol_fee_is_thirty_bps() {
    assert_eq!(SwapQuoter::default().get_protocol_fee(u(10_000)), u(30));
}

#[test]
fn zero_inputs_are_rejected() {
    let quoter = SwapQuoter::default();
    let zero_amount = quoter
        .get_amount_out(U256::zero(), u(100), u(100), QuoteOptions::default())
        .unwrap_err();
    let zero_reserve = quoter
        .get_amount_out(u(100), U256::zero(), u(100), QuoteOptions::default())
        .unwrap_err();

    assert!(zero_amount.is_invariant());
    assert!(zero_reserve.is_invariant());
}

#[test]
fn eighteen_decimal_pool_lifecycle() {
    let decimals = U256::from(10u64).pow(U256::from(18u64));
    let liquidity = U256::from(1_000_000u64) * decimals;
    let swap_amount = U256::from(1_000u64) * decimals;

    let pair = TokenPair::new(Token::Native, Token::Psp22("5FHneW46".to_string())).unwrap();
    let quoter = SwapQuoter::new(Slippage::from_bps(50).unwrap());
    let mut registry = PoolRegistry::new();

    let seed = quoter
        .quote_add_liquidity(&registry, &pair, Some(liquidity), Some(liquidity), QuoteOptions::default())
        .unwrap();
    assert_eq!(seed.shares_amount_received + seed.shares_amount_burned, liquidity);

    registry.insert(&pair, PoolState::new(liquidity, liquidity, liquidity));

    let path = TradingPath::new(vec![Token::Native, Token::Psp22("5FHneW46".to_string())]).unwrap();
    let out = quoter
        .quote_exact_input(&registry, &path, swap_amount, QuoteOptions::default())
        .unwrap();
    assert!(out.amount_out < swap_amount);
    assert!(out.amount_out_min < out.amount_out);
    assert_eq!(out.fee, U256::from(3u64) * decimals);

    let pct = out.price_impact.as_percent().unwrap();
    assert!(pct.is_sign_positive());
    assert!(pct < bho_swap_amm::Decimal::ONE);

    let exact = quoter
        .quote_exact_output(&registry, &path, out.amount_out, QuoteOptions::default())
        .unwrap();
    assert!(exact.amount_in <= swap_amount + U256::one());
    assert!(exact.amount_in_max > exact.amount_in);
}

#[test]
fn invalid_pairs_and_paths() {
    assert_eq!(
        TokenPair::new(Token::Native, Token::Native).unwrap_err(),
        QuoteError::InvalidTokenPair
    );
    assert_eq!(
        TradingPath::parse(&["BHO", "5Grw", "5FHn"]).unwrap_err(),
        QuoteError::InvalidTradingPath
    );
}
