use core::fmt::{Display, Formatter, Result as FmtResult};

use ibc::core::host::types::path::{
    ClientConnectionPath, ClientConsensusStatePath, ClientStatePath, ConnectionPath, Namespace,
    Path as IbcPath,
};

/// A full store key, namespace included, e.g.
/// `protocol/connections/connection-0`.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Hash)]
pub struct Path(String);

impl Path {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this key lives under `namespace`.
    pub fn is_in(&self, namespace: Namespace) -> bool {
        self.0
            .strip_prefix(namespace.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }

    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.starts_with(prefix.as_str())
    }
}

impl AsRef<[u8]> for Path {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<String> for Path {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for Path {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<IbcPath> for Path {
    fn from(path: IbcPath) -> Self {
        Self(path.store_key())
    }
}

macro_rules! impl_from_ibc_path {
    ($($path:ty),+) => {
        $(
            impl From<$path> for Path {
                fn from(path: $path) -> Self {
                    IbcPath::from(path).into()
                }
            }
        )+
    };
}

impl_from_ibc_path!(
    ClientStatePath,
    ClientConsensusStatePath,
    ClientConnectionPath,
    ConnectionPath
);

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
