use ibc_core_client::context::ClientValidationContext;
use ibc_core_client::handler::{create_client, misbehaviour, update_client};
use ibc_core_client::types::msgs::ClientMsg;
use ibc_core_connection::handler::{
    conn_open_ack, conn_open_confirm, conn_open_init, conn_open_try,
};
use ibc_core_connection::types::msgs::ConnectionMsg;
use ibc_core_handler_types::error::HandlerError;
use ibc_core_handler_types::msgs::MsgEnvelope;
use ibc_core_host::{ExecutionContext, ValidationContext};

/// The message envelope a host with context `Ctx` accepts.
pub type MsgEnvelopeOf<Ctx> = MsgEnvelope<
    <Ctx as ClientValidationContext>::SignedHeader,
    <Ctx as ClientValidationContext>::ValidatorSet,
>;

/// Entrypoint which performs both validation and message execution
pub fn dispatch<Ctx>(ctx: &mut Ctx, msg: MsgEnvelopeOf<Ctx>) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    validate(ctx, &msg)?;
    execute(ctx, msg)
}

/// Entrypoint which only performs message validation
///
/// If a transaction contains `n` messages `m_1` ... `m_n`, then
/// they MUST be processed as follows:
///     validate(m_1), execute(m_1), ..., validate(m_n), execute(m_n)
/// That is, the state transition of message `i` must be applied before
/// message `i+1` is validated. This is equivalent to calling
/// `dispatch()` on each successively.
pub fn validate<Ctx>(ctx: &Ctx, msg: &MsgEnvelopeOf<Ctx>) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    match msg {
        MsgEnvelope::Client(msg) => match msg {
            ClientMsg::CreateClient(msg) => create_client::validate(ctx, msg)?,
            ClientMsg::UpdateClient(msg) => update_client::validate(ctx, msg)?,
            ClientMsg::Misbehaviour(msg) => misbehaviour::validate(ctx, msg)?,
        },
        MsgEnvelope::Connection(msg) => match msg {
            ConnectionMsg::OpenInit(msg) => conn_open_init::validate(ctx, msg)?,
            ConnectionMsg::OpenTry(msg) => conn_open_try::validate(ctx, msg)?,
            ConnectionMsg::OpenAck(msg) => conn_open_ack::validate(ctx, msg)?,
            ConnectionMsg::OpenConfirm(msg) => conn_open_confirm::validate(ctx, msg)?,
        },
    }

    Ok(())
}

/// Entrypoint which only performs message execution
pub fn execute<Ctx>(ctx: &mut Ctx, msg: MsgEnvelopeOf<Ctx>) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    match msg {
        MsgEnvelope::Client(msg) => match msg {
            ClientMsg::CreateClient(msg) => create_client::execute(ctx, msg)?,
            ClientMsg::UpdateClient(msg) => update_client::execute(ctx, msg)?,
            ClientMsg::Misbehaviour(msg) => misbehaviour::execute(ctx, msg)?,
        },
        MsgEnvelope::Connection(msg) => match msg {
            ConnectionMsg::OpenInit(msg) => conn_open_init::execute(ctx, msg)?,
            ConnectionMsg::OpenTry(msg) => conn_open_try::execute(ctx, msg)?,
            ConnectionMsg::OpenAck(msg) => conn_open_ack::execute(ctx, msg)?,
            ConnectionMsg::OpenConfirm(msg) => conn_open_confirm::execute(ctx, msg)?,
        },
    }

    Ok(())
}
