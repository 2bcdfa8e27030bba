//! Definition of domain type message `MsgSubmitMisbehaviour`.

use crate::misbehaviour::Misbehaviour;

/// A type of message that submits client misbehaviour evidence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MsgSubmitMisbehaviour<S, V> {
    /// misbehaviour used for freezing the light client
    pub misbehaviour: Misbehaviour<S, V>,
}

impl<S, V> MsgSubmitMisbehaviour<S, V> {
    pub fn new(misbehaviour: Misbehaviour<S, V>) -> Self {
        Self { misbehaviour }
    }
}
