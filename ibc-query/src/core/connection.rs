//! Provides utility functions for querying IBC connection states.

use ibc::core::client::types::Height;
use ibc::core::connection::types::IdentifiedConnectionEnd;
use ibc::core::host::types::identifiers::ConnectionId;
use serde::Serialize;
use tracing::debug;

use super::ChainNode;
use crate::error::QueryError;

/// Defines the request type for querying a connection.
#[derive(Clone, Debug)]
pub struct QueryConnectionRequest {
    pub connection_id: ConnectionId,
    /// Defaults to the latest committed height.
    pub query_height: Option<Height>,
}

/// Defines the response type for querying a connection.
#[derive(Clone, Debug, Serialize)]
pub struct QueryConnectionResponse {
    pub connection: IdentifiedConnectionEnd,
    pub height: Height,
}

/// Queries for the connection end of a given connection id.
pub fn query_connection<N>(
    node: &N,
    request: &QueryConnectionRequest,
) -> Result<QueryConnectionResponse, QueryError>
where
    N: ChainNode,
{
    let height = match request.query_height {
        Some(height) => height,
        None => node.latest_height()?,
    };

    debug!(connection_id = %request.connection_id, %height, "querying connection");

    let connection_end = node
        .connection_end(&request.connection_id, height)?
        .ok_or_else(|| QueryError::ConnectionNotFound {
            connection_id: request.connection_id.clone(),
            height,
        })?;

    Ok(QueryConnectionResponse {
        connection: IdentifiedConnectionEnd::new(request.connection_id.clone(), connection_end),
        height,
    })
}
