//! The operator-facing query commands.

use ibc::core::host::types::identifiers::ConnectionId;
use serde::Serialize;
use tracing::debug;

use crate::core::{
    query_connection, query_consensus_state, query_header, ChainNode, QueryConnectionRequest,
    ValidatorSetOffset,
};
use crate::error::QueryError;

/// A query an operator can run against a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryCommand {
    /// The connection end stored under the given id at the latest height.
    Connection { connection_id: ConnectionId },
    /// The consensus state derived from the latest committed header.
    ConsensusState,
    /// The latest committed header with its signing validator sets.
    Header,
}

/// Runs `command` against `node` and returns its result as indented JSON.
///
/// Fails on any lookup error; nothing is rendered in that case.
pub fn run<N>(
    node: &N,
    command: &QueryCommand,
    offset: ValidatorSetOffset,
) -> Result<String, QueryError>
where
    N: ChainNode,
{
    debug!(?command, "running query");

    match command {
        QueryCommand::Connection { connection_id } => {
            let request = QueryConnectionRequest {
                connection_id: connection_id.clone(),
                query_height: None,
            };
            to_json(&query_connection(node, &request)?.connection.connection_end)
        }
        QueryCommand::ConsensusState => to_json(&query_consensus_state(node, None, offset)?),
        QueryCommand::Header => to_json(&query_header(node, None, offset)?),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, QueryError> {
    Ok(serde_json::to_string_pretty(value)?)
}
