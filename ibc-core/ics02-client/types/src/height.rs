//! Defines the core `Height` type used throughout the library

use core::num::ParseIntError;
use core::str::FromStr;

use displaydoc::Display;
use ibc_primitives::prelude::*;

use crate::error::ClientError;

/// The height of a tracked chain: the number of blocks since genesis.
/// Always non-zero.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u64", into = "u64")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Height(u64);

impl Height {
    pub fn new(height: u64) -> Result<Self, ClientError> {
        if height == 0 {
            return Err(ClientError::InvalidHeight);
        }

        Ok(Self(height))
    }

    pub fn min() -> Self {
        Self(1)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn add(&self, delta: u64) -> Height {
        Height(self.0.saturating_add(delta))
    }

    pub fn increment(&self) -> Height {
        self.add(1)
    }

    pub fn sub(&self, delta: u64) -> Result<Height, ClientError> {
        if self.0 <= delta {
            return Err(ClientError::InvalidHeightResult);
        }

        Ok(Height(self.0 - delta))
    }

    pub fn decrement(&self) -> Result<Height, ClientError> {
        self.sub(1)
    }
}

impl TryFrom<u64> for Height {
    type Error = ClientError;

    fn try_from(height: u64) -> Result<Self, Self::Error> {
        Height::new(height)
    }
}

impl From<Height> for u64 {
    fn from(height: Height) -> Self {
        height.0
    }
}

impl core::fmt::Display for Height {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl From<Height> for String {
    fn from(height: Height) -> Self {
        height.0.to_string()
    }
}

/// Encodes all errors related to chain heights
#[derive(Debug, Display, PartialEq, Eq)]
pub enum HeightError {
    /// cannot convert into a `Height` type from string `{height}`
    HeightConversion {
        height: String,
        error: ParseIntError,
    },
    /// attempted to parse an invalid zero height
    ZeroHeight,
}

#[cfg(feature = "std")]
impl std::error::Error for HeightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            HeightError::HeightConversion { error: e, .. } => Some(e),
            HeightError::ZeroHeight => None,
        }
    }
}

impl FromStr for Height {
    type Err = HeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let height = s
            .parse::<u64>()
            .map_err(|e| HeightError::HeightConversion {
                height: s.to_owned(),
                error: e,
            })?;

        Height::new(height).map_err(|_| HeightError::ZeroHeight)
    }
}
