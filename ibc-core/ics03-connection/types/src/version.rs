//! Defines connection versioning type and functions

use core::fmt::Display;

use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;
use ibc_primitives::utils::PrettySlice;
use ibc_primitives::DecodingError;
use ibc_proto::ibc::core::connection::v1::Version as RawVersion;

use crate::error::ConnectionError;

/// Identifier of the only protocol version this implementation speaks.
pub const DEFAULT_VERSION_IDENTIFIER: &str = "1";

/// Stores the identifier and the features supported by a version
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Version {
    /// unique version identifier
    identifier: String,
    /// list of features compatible with the specified identifier
    features: Vec<String>,
}

impl Version {
    pub fn new(identifier: String, features: Vec<String>) -> Self {
        Self {
            identifier,
            features,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Checks whether the version has a matching version identifier and its
    /// feature set is a subset of the supported features
    pub fn verify_is_supported(
        &self,
        supported_versions: &[Version],
    ) -> Result<(), ConnectionError> {
        let supported = find_supported_version(self, supported_versions)?;

        if self.features.is_empty() {
            return Err(ConnectionError::version_mismatch(format!(
                "version {} carries no features",
                self.identifier
            )));
        }

        for feature in self.features.iter() {
            supported.verify_feature_supported(feature)?;
        }
        Ok(())
    }

    /// Checks whether the given feature is supported in this version
    pub fn verify_feature_supported(&self, feature: &str) -> Result<(), ConnectionError> {
        if !self.features.iter().any(|f| f == feature) {
            return Err(ConnectionError::version_mismatch(format!(
                "feature {feature} not supported by version {}",
                self.identifier
            )));
        }
        Ok(())
    }

    /// Returns the lists of supported versions
    pub fn compatibles() -> Vec<Self> {
        vec![Self {
            identifier: DEFAULT_VERSION_IDENTIFIER.to_string(),
            features: vec!["ORDER_ORDERED".to_string(), "ORDER_UNORDERED".to_string()],
        }]
    }
}

impl Protobuf<RawVersion> for Version {}

impl TryFrom<RawVersion> for Version {
    type Error = ConnectionError;

    fn try_from(value: RawVersion) -> Result<Self, Self::Error> {
        if value.identifier.trim().is_empty() {
            return Err(DecodingError::invalid_field("empty version identifier").into());
        }
        if value.features.iter().any(|f| f.trim().is_empty()) {
            return Err(DecodingError::invalid_field("empty version feature").into());
        }
        Ok(Version {
            identifier: value.identifier,
            features: value.features,
        })
    }
}

impl From<Version> for RawVersion {
    fn from(value: Version) -> Self {
        Self {
            identifier: value.identifier,
            features: value.features,
        }
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Version {{ identifier: {}, features: {} }}",
            self.identifier,
            PrettySlice(&self.features)
        )
    }
}

/// Selects the version both parties can speak.
///
/// Walks the host's supported versions and keeps those whose identifier the
/// counterparty also offers, narrowed to the shared features. Candidates
/// with no shared feature are skipped. The lowest identifier wins.
pub fn pick_version(
    supported_versions: &[Version],
    counterparty_versions: &[Version],
) -> Result<Version, ConnectionError> {
    let mut intersection: Vec<Version> = Vec::new();
    for sv in supported_versions.iter() {
        if let Ok(cv) = find_supported_version(sv, counterparty_versions) {
            if let Some(features) = get_feature_set_intersection(&sv.features, &cv.features) {
                intersection.push(Version {
                    identifier: cv.identifier,
                    features,
                })
            }
        }
    }

    intersection.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    intersection
        .into_iter()
        .next()
        .ok_or_else(|| ConnectionError::version_mismatch("no common version"))
}

fn find_supported_version(
    version: &Version,
    supported_versions: &[Version],
) -> Result<Version, ConnectionError> {
    supported_versions
        .iter()
        .find(|sv| sv.identifier == version.identifier)
        .cloned()
        .ok_or_else(|| ConnectionError::unsupported_version(version))
}

fn get_feature_set_intersection(
    supported_features: &[String],
    counterparty_features: &[String],
) -> Option<Vec<String>> {
    let intersection: Vec<String> = supported_features
        .iter()
        .filter(|f| counterparty_features.contains(f))
        .cloned()
        .collect();

    (!intersection.is_empty()).then_some(intersection)
}
