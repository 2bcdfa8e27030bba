use ibc_primitives::prelude::*;

use crate::error::IdentifierError as Error;
use crate::identifiers::ConnectionId;

const VALID_SPECIAL_CHARS: &str = "._+-#[]<>";

/// Checks that the identifier only contains alphanumeric characters or one of
/// `.`, `_`, `+`, `-`, `#`, `[`, `]`, `<`, `>`.
pub fn validate_identifier_chars(id: &str) -> Result<(), Error> {
    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || VALID_SPECIAL_CHARS.contains(c))
    {
        return Err(Error::InvalidCharacter { id: id.into() });
    }

    Ok(())
}

/// Checks that the identifier length lies within `[min, max]`. Empty
/// identifiers are always rejected.
pub fn validate_identifier_length(id: &str, min: u64, max: u64) -> Result<(), Error> {
    let min = min.max(1);
    let length = id.len() as u64;
    if (min..=max).contains(&length) {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            id: id.into(),
            min,
            max,
        })
    }
}

/// Checks that the identifier is a named u64 index, `{name}-{u64}`, without
/// leading zeros. Example: "connection-0", "connection-100".
pub fn validate_named_u64_index(id: &str, name: &str) -> Result<(), Error> {
    let invalid_prefix = || Error::InvalidPrefix {
        id: id.into(),
        prefix: name.into(),
    };

    let number_s = id
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('-'))
        .ok_or_else(invalid_prefix)?;

    if number_s.starts_with('0') && number_s.len() > 1 {
        return Err(invalid_prefix());
    }

    number_s.parse::<u64>().map_err(|_| invalid_prefix())?;

    Ok(())
}

/// Client types, e.g. `07-tendermint`, must leave room for the `-{counter}`
/// suffix of a 9 to 64 character client identifier.
pub fn validate_client_type(client_type: &str) -> Result<(), Error> {
    validate_identifier_chars(client_type)?;
    validate_identifier_length(client_type, 7, 43)
}

/// A valid client identifier is `{client_type}-{counter}` and 9 to 64
/// characters long.
pub fn validate_client_identifier(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 9, 64)?;
    let (client_type, _) = id.rsplit_once('-').ok_or_else(|| Error::InvalidPrefix {
        id: id.into(),
        prefix: "{client_type}".into(),
    })?;
    validate_client_type(client_type)?;
    validate_named_u64_index(id, client_type)
}

/// A valid connection identifier is `connection-{n}` and 10 to 64 characters long.
pub fn validate_connection_identifier(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 10, 64)?;
    validate_named_u64_index(id, ConnectionId::prefix())
}

/// Chain identifiers are free-form but bounded to 50 characters, the limit
/// imposed by Tendermint-based engines.
pub fn validate_chain_identifier(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 1, 50)
}
