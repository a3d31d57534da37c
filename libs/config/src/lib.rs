//! # BHO Swap SDK Configuration
//!
//! Layered configuration shared by the SDK command-line tools.
//!
//! ## Features
//!
//! - **Quote defaults**: slippage tolerance applied when a request has none
//! - **Contract addresses**: router and factory, for callers that submit trades
//! - **Logging**: `tracing` filter directive and output format
//!
//! ## Usage
//!
//! ```rust
//! use bho_swap_config::SdkConfig;
//!
//! let config = SdkConfig::from_toml_str("[quote]\ndefault_slippage_bps = 100\n").unwrap();
//! assert_eq!(config.default_slippage().unwrap().bps(), 100);
//! ```

pub mod defaults;
pub mod sdk_config;

pub use defaults::*;
pub use sdk_config::{
    load_config, ContractAddresses, LoggingSettings, QuoteSettings, SdkConfig,
};
