//! Serde support: strings for human-readable formats, the raw mantissa for
//! binary ones.

use alloc::string::String;
use core::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::decimal::Decimal;
use crate::round::RoundPolicy;

impl<const PREC: u32, R: RoundPolicy> Serialize for Decimal<PREC, R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            // JSON, TOML and friends: the canonical trimmed string
            serializer.collect_str(self)
        } else {
            // compact binary formats: the raw mantissa
            self.as_unbiased().serialize(serializer)
        }
    }
}

impl<'de, const PREC: u32, R: RoundPolicy> Deserialize<'de> for Decimal<PREC, R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let input = String::deserialize(deserializer)?;
            Self::from_str(&input).map_err(de::Error::custom)
        } else {
            let value = i64::deserialize(deserializer)?;
            Ok(Self::from_unbiased(value))
        }
    }
}
