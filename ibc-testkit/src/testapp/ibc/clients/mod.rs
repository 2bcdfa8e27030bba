pub mod mock;

use ibc::core::client::types::{ConsensusState, Header, Misbehaviour};

use self::mock::header::MockSignedHeader;
use self::mock::validator_set::MockValidatorSet;

pub type MockHeader = Header<MockSignedHeader, MockValidatorSet>;

pub type MockConsensusState = ConsensusState<MockValidatorSet>;

pub type MockMisbehaviour = Misbehaviour<MockSignedHeader, MockValidatorSet>;
