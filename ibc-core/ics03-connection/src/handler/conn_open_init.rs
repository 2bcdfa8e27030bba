//! Protocol logic specific to ICS3 messages of type `MsgConnectionOpenInit`.

use ibc_core_client::types::error::ClientError;
use ibc_core_client::types::Status;
use ibc_core_client::verify::client_status;
use ibc_core_connection_types::error::ConnectionError;
use ibc_core_connection_types::events::OpenInit;
use ibc_core_connection_types::msgs::MsgConnectionOpenInit;
use ibc_core_handler_types::events::IbcEvent;
use ibc_core_host::{ExecutionContext, ValidationContext};

use super::store_conn_end;
use crate::transition::open_init;

pub fn validate<Ctx>(ctx_a: &Ctx, msg: &MsgConnectionOpenInit) -> Result<(), ConnectionError>
where
    Ctx: ValidationContext,
{
    msg.validate_basic()?;

    // the local client must be able to verify the counterparty's proofs later on
    if client_status(ctx_a, &msg.client_id)? == Status::Frozen {
        return Err(ClientError::ClientFrozen {
            client_id: msg.client_id.clone(),
        }
        .into());
    }

    let current = ctx_a.connection_end(&msg.connection_id)?;
    open_init(current.as_ref(), msg, &ctx_a.get_compatible_versions())?;

    Ok(())
}

pub fn execute<Ctx>(ctx_a: &mut Ctx, msg: MsgConnectionOpenInit) -> Result<(), ConnectionError>
where
    Ctx: ExecutionContext,
{
    let current = ctx_a.connection_end(&msg.connection_id)?;
    let conn_end_on_a = open_init(current.as_ref(), &msg, &ctx_a.get_compatible_versions())?;

    let event = IbcEvent::OpenInitConnection(OpenInit::new(
        msg.connection_id.clone(),
        msg.client_id.clone(),
        msg.counterparty.client_id().clone(),
    ));

    store_conn_end(ctx_a, msg.connection_id, conn_end_on_a, event)
}
