use core::fmt::{Display, Formatter, Result as FmtResult};

/// Store version, the number of commits so far.
pub type RawHeight = u64;

/// Store version to read from.
#[derive(Debug, Copy, Clone, Eq, Ord, PartialEq, PartialOrd)]
pub enum Height {
    /// The uncommitted working state.
    Pending,
    /// The last committed version.
    Latest,
    Stable(RawHeight),
}

impl Display for Height {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Height::Pending => write!(f, "pending"),
            Height::Latest => write!(f, "latest"),
            Height::Stable(height) => write!(f, "{height}"),
        }
    }
}

/// Zero reads the latest version, as in ABCI queries.
impl From<RawHeight> for Height {
    fn from(value: RawHeight) -> Self {
        match value {
            0 => Height::Latest,
            _ => Height::Stable(value),
        }
    }
}
