//! Serde helpers shared by the domain types.

use serde::{Deserialize, Deserializer, Serializer};
use subtle_encoding::{Encoding, Hex};

use crate::prelude::*;
use crate::utils::hex_upper;

/// Serializes a byte buffer as an upper-case hex string.
pub fn ser_hex_upper<S, T>(data: T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    let hex = hex_upper(data.as_ref()).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&hex)
}

/// Reads back a byte buffer written by [`ser_hex_upper`].
pub fn de_hex_upper<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let hex = String::deserialize(deserializer)?;
    Hex::upper_case()
        .decode_from_str(&hex)
        .map_err(serde::de::Error::custom)
}
