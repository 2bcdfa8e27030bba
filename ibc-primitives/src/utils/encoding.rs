use core::fmt::{Error as FmtError, Formatter};

use subtle_encoding::{Encoding, Hex};

use crate::prelude::*;

/// Renders `bytes` as an upper-case hex string.
pub fn hex_upper(bytes: &[u8]) -> Result<String, FmtError> {
    Hex::upper_case()
        .encode_to_string(bytes)
        .map_err(|_| FmtError)
}

/// Writes `name("<HEX>")` into the formatter, for `Debug` impls of byte wrappers.
pub fn debug_hex(f: &mut Formatter<'_>, name: &str, bytes: &[u8]) -> Result<(), FmtError> {
    let hex = hex_upper(bytes)?;
    f.debug_tuple(name).field(&hex).finish()
}
