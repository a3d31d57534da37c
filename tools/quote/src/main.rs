//! `bho-quote`: BHO Swap quotes from the command line
//!
//! Every subcommand prints a pretty JSON document on stdout with amounts as
//! decimal strings. Logs go to stderr.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use bho_swap_amm::{QuoteOptions, Slippage, SwapQuoter, U256};
use bho_swap_config::SdkConfig;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bho-quote")]
#[command(about = "Quote swaps and liquidity operations against BHO Swap pools")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./bho-swap.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, overrides RUST_LOG and the configured level
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Output received for an exact input
    AmountOut {
        #[arg(value_parser = parse_amount)]
        amount_in: U256,
        #[arg(value_parser = parse_amount)]
        reserve_in: U256,
        #[arg(value_parser = parse_amount)]
        reserve_out: U256,
        #[command(flatten)]
        slippage: SlippageArg,
    },
    /// Input required for an exact output
    AmountIn {
        #[arg(value_parser = parse_amount)]
        amount_out: U256,
        #[arg(value_parser = parse_amount)]
        reserve_in: U256,
        #[arg(value_parser = parse_amount)]
        reserve_out: U256,
        #[command(flatten)]
        slippage: SlippageArg,
    },
    /// Shares minted and amounts deposited when adding liquidity
    AddLiquidity {
        /// Amount of token A offered
        #[arg(long, value_parser = parse_amount)]
        amount_a: Option<U256>,
        /// Amount of token B offered
        #[arg(long, value_parser = parse_amount)]
        amount_b: Option<U256>,
        #[arg(value_parser = parse_amount)]
        reserve_a: U256,
        #[arg(value_parser = parse_amount)]
        reserve_b: U256,
        /// Total supply of pool shares
        #[arg(value_parser = parse_amount)]
        supply: U256,
        #[command(flatten)]
        slippage: SlippageArg,
    },
    /// Amounts returned when burning pool shares
    RemoveLiquidity {
        #[arg(value_parser = parse_amount)]
        shares: U256,
        /// Total supply of pool shares
        #[arg(value_parser = parse_amount)]
        supply: U256,
        #[arg(value_parser = parse_amount)]
        reserve_a: U256,
        #[arg(value_parser = parse_amount)]
        reserve_b: U256,
        #[command(flatten)]
        slippage: SlippageArg,
    },
    /// Protocol fee charged on an input amount
    ProtocolFee {
        #[arg(value_parser = parse_amount)]
        amount: U256,
    },
}

#[derive(Args)]
struct SlippageArg {
    /// Slippage tolerance in basis points (defaults to the configured value)
    #[arg(long)]
    slippage: Option<u32>,
}

impl SlippageArg {
    fn options(&self) -> Result<QuoteOptions> {
        match self.slippage {
            Some(bps) => {
                let slippage = Slippage::from_bps(bps).context("Invalid --slippage")?;
                Ok(QuoteOptions::with_slippage(slippage))
            }
            None => Ok(QuoteOptions::default()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProtocolFeeOutput {
    amount: String,
    protocol_fee: String,
}

fn parse_amount(value: &str) -> std::result::Result<U256, String> {
    U256::from_dec_str(value).map_err(|e| format!("invalid decimal amount {value:?}: {e:?}"))
}

fn init_logging(cli_level: Option<&str>, config: &SdkConfig) -> Result<()> {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(level).context("Invalid --log-level")?,
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.logging.level))
            .context("Invalid logging.level")?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if config.logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow!("Failed to install log subscriber: {e}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render quote")?;
    println!("{rendered}");
    Ok(())
}

fn quoter_from_config(config: &SdkConfig) -> Result<SwapQuoter> {
    Ok(SwapQuoter::new(config.default_slippage()?))
}

fn run(command: Commands, quoter: &SwapQuoter) -> Result<()> {
    match command {
        Commands::AmountOut {
            amount_in,
            reserve_in,
            reserve_out,
            slippage,
        } => {
            let quote = quoter.get_amount_out(amount_in, reserve_in, reserve_out, slippage.options()?)?;
            print_json(&quote)
        }

        Commands::AmountIn {
            amount_out,
            reserve_in,
            reserve_out,
            slippage,
        } => {
            let quote = quoter.get_amount_in(amount_out, reserve_in, reserve_out, slippage.options()?)?;
            print_json(&quote)
        }

        Commands::AddLiquidity {
            amount_a,
            amount_b,
            reserve_a,
            reserve_b,
            supply,
            slippage,
        } => {
            let quote = quoter.get_add_liquidity_info(
                amount_a,
                amount_b,
                reserve_a,
                reserve_b,
                supply,
                slippage.options()?,
            )?;
            print_json(&quote)
        }

        Commands::RemoveLiquidity {
            shares,
            supply,
            reserve_a,
            reserve_b,
            slippage,
        } => {
            let quote = quoter.get_remove_liquidity_info(
                shares,
                supply,
                reserve_a,
                reserve_b,
                slippage.options()?,
            )?;
            print_json(&quote)
        }

        Commands::ProtocolFee { amount } => print_json(&ProtocolFeeOutput {
            amount: amount.to_string(),
            protocol_fee: quoter.get_protocol_fee(amount).to_string(),
        }),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SdkConfig::load(cli.config.as_deref())?;
    init_logging(cli.log_level.as_deref(), &config)?;

    let quoter = quoter_from_config(&config)?;
    debug!(default_slippage = %quoter.default_slippage(), "Quoter ready");

    run(cli.command, &quoter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_amount_out() {
        let cli = Cli::try_parse_from([
            "bho-quote",
            "amount-out",
            "1000",
            "1000000",
            "2000000",
            "--slippage",
            "50",
        ])
        .unwrap();

        match cli.command {
            Commands::AmountOut {
                amount_in,
                reserve_out,
                slippage,
                ..
            } => {
                assert_eq!(amount_in, U256::from(1_000u64));
                assert_eq!(reserve_out, U256::from(2_000_000u64));
                assert_eq!(slippage.slippage, Some(50));
            }
            _ => panic!("expected amount-out"),
        }
    }

    #[test]
    fn test_parse_one_sided_add_liquidity() {
        let cli = Cli::try_parse_from([
            "bho-quote",
            "--log-level",
            "debug",
            "add-liquidity",
            "--amount-b",
            "500",
            "1000",
            "2000",
            "1414",
        ])
        .unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Commands::AddLiquidity {
                amount_a, amount_b, ..
            } => {
                assert!(amount_a.is_none());
                assert_eq!(amount_b, Some(U256::from(500u64)));
            }
            _ => panic!("expected add-liquidity"),
        }
    }

    #[test]
    fn test_rejects_non_decimal_amounts() {
        assert!(parse_amount("0x10").is_err());
        assert!(parse_amount("-5").is_err());
        assert_eq!(
            parse_amount("115792089237316195423570985008687907853269984665640564039457584007913129639935")
                .unwrap(),
            U256::MAX
        );
    }

    #[test]
    fn test_slippage_flag_is_validated() {
        let arg = SlippageArg { slippage: Some(10_001) };
        assert!(arg.options().is_err());

        let arg = SlippageArg { slippage: None };
        assert!(arg.options().unwrap().slippage.is_none());
    }

    #[test]
    fn test_second_subscriber_install_is_reported() {
        let config = SdkConfig::default();
        // Only one global subscriber can be installed per process
        let _ = init_logging(Some("warn"), &config);
        let err = init_logging(Some("warn"), &config).unwrap_err();
        assert!(err.to_string().contains("Failed to install log subscriber"));
    }

    #[test]
    fn test_unconfigured_quote_has_exact_minimum() {
        let quoter = quoter_from_config(&SdkConfig::default()).unwrap();
        let options = SlippageArg { slippage: None }.options().unwrap();
        let quote = quoter
            .get_amount_out(
                U256::from(1_000u64),
                U256::from(1_000_000u64),
                U256::from(2_000_000u64),
                options,
            )
            .unwrap();

        assert_eq!(quote.amount_out, U256::from(1_992u64));
        assert_eq!(quote.amount_out_min, quote.amount_out);
    }

    #[test]
    fn test_configured_slippage_applies_without_flag() {
        let config = SdkConfig::from_toml_str("[quote]\ndefault_slippage_bps = 50\n").unwrap();
        let quote = quoter_from_config(&config)
            .unwrap()
            .get_amount_out(
                U256::from(1_000u64),
                U256::from(1_000_000u64),
                U256::from(2_000_000u64),
                QuoteOptions::default(),
            )
            .unwrap();
        assert_eq!(quote.amount_out_min, U256::from(1_983u64));
    }

    #[test]
    fn test_quote_failures_surface_as_errors() {
        let quoter = SwapQuoter::default();
        let command = Commands::AmountIn {
            amount_out: U256::from(2_000u64),
            reserve_in: U256::from(1_000u64),
            reserve_out: U256::from(2_000u64),
            slippage: SlippageArg { slippage: None },
        };

        let err = run(command, &quoter).unwrap_err();
        assert!(err.to_string().contains("Insufficient liquidity"));
    }
}
