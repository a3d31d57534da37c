//! Serde adapters writing big integers as decimal strings
//!
//! `ethereum-types` serializes as `0x`-prefixed hex; quotes are read by
//! people and by JavaScript clients that expect base-10 strings.

use ethereum_types::{U256, U512};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt::Display;

/// Parse a base-10 string into a wide unsigned integer
pub trait DecimalAmount: Sized {
    fn parse_decimal(value: &str) -> Option<Self>;
}

impl DecimalAmount for U256 {
    fn parse_decimal(value: &str) -> Option<Self> {
        U256::from_dec_str(value).ok()
    }
}

impl DecimalAmount for U512 {
    fn parse_decimal(value: &str) -> Option<Self> {
        U512::from_dec_str(value).ok()
    }
}

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: DecimalAmount,
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    T::parse_decimal(raw.trim())
        .ok_or_else(|| D::Error::custom(format!("invalid decimal amount: {raw}")))
}
