//! Layered SDK configuration
//!
//! Values are resolved in order: built-in defaults, then the TOML file (if
//! any), then `BHO_SWAP_*` environment variables. Nested keys use a double
//! underscore, so `BHO_SWAP_QUOTE__DEFAULT_SLIPPAGE_BPS=100` overrides
//! `[quote] default_slippage_bps`.

use std::path::Path;

use anyhow::{bail, Context, Result};
use bho_swap_amm::{Slippage, MAX_SLIPPAGE_BPS};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::defaults::{
    DEFAULT_CONFIG_FILE, DEFAULT_LOG_LEVEL, DEFAULT_SLIPPAGE_BPS, ENV_PREFIX, ENV_SEPARATOR,
};

/// Defaults above this are accepted but logged
const HIGH_SLIPPAGE_BPS: u32 = 1_000;

/// Complete SDK configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SdkConfig {
    pub quote: QuoteSettings,
    pub contracts: ContractAddresses,
    pub logging: LoggingSettings,
}

/// Quote defaults applied when a request does not carry its own options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuoteSettings {
    pub default_slippage_bps: u32,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            default_slippage_bps: DEFAULT_SLIPPAGE_BPS,
        }
    }
}

/// Deployed contract addresses, kept for callers that submit the quoted
/// transactions. The quote engine itself never reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractAddresses {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive, e.g. `info` or `bho_swap_amm=trace`
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}

impl SdkConfig {
    /// Load configuration from `path` (or `bho-swap.toml` in the working
    /// directory) with environment overrides applied on top.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if path.is_none() && !Path::new(DEFAULT_CONFIG_FILE).exists() {
            info!("No {} found, using defaults and environment", DEFAULT_CONFIG_FILE);
        }

        let (file, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        let settings = Config::builder()
            .add_source(File::from(file).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to build configuration from {}", file.display()))?;

        let config: SdkConfig = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()?;

        info!(
            file = %file.display(),
            default_slippage_bps = config.quote.default_slippage_bps,
            "Loaded SDK configuration"
        );
        Ok(config)
    }

    /// Parse configuration from an in-memory TOML document, without
    /// environment overrides
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SdkConfig = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()
            .context("Failed to parse TOML configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    pub fn validate(&self) -> Result<()> {
        if self.quote.default_slippage_bps > MAX_SLIPPAGE_BPS {
            bail!(
                "quote.default_slippage_bps must be at most {}, got {}",
                MAX_SLIPPAGE_BPS,
                self.quote.default_slippage_bps
            );
        }
        if self.quote.default_slippage_bps > HIGH_SLIPPAGE_BPS {
            warn!(
                default_slippage_bps = self.quote.default_slippage_bps,
                "Default slippage above 10%, minimum outputs will be loose"
            );
        }
        if self.logging.level.trim().is_empty() {
            bail!("logging.level must not be empty");
        }
        for (name, address) in [
            ("router", &self.contracts.router),
            ("factory", &self.contracts.factory),
        ] {
            if matches!(address, Some(addr) if addr.trim().is_empty()) {
                bail!("contracts.{} must not be an empty string", name);
            }
        }
        debug!("Configuration validated");
        Ok(())
    }

    /// Default slippage as a validated tolerance
    pub fn default_slippage(&self) -> Result<Slippage> {
        Slippage::from_bps(self.quote.default_slippage_bps)
            .context("Invalid quote.default_slippage_bps")
    }
}

/// Load configuration from the default location
pub fn load_config() -> Result<SdkConfig> {
    SdkConfig::load(None)
}
