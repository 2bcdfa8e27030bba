pub mod core;

use std::fmt::Debug;

use ibc::core::handler::types::error::HandlerError;
use ibc::core::primitives::prelude::*;

use crate::context::MockContext;
use crate::hosts::{MockHost, TestHost};

pub enum Expect {
    Success,
    Failure(Option<HandlerError>),
}

#[derive(Debug)]
pub struct Fixture<M: Debug, H: TestHost = MockHost> {
    pub ctx: MockContext<H>,
    pub msg: M,
}

impl<M: Debug, H: TestHost> Fixture<M, H> {
    pub fn generate_error_msg(
        &self,
        expect: &Expect,
        process: &str,
        res: &Result<(), HandlerError>,
    ) -> String {
        let base_error = match expect {
            Expect::Success => "step failed!",
            Expect::Failure(_) => "step passed but was supposed to fail!",
        };
        format!(
            "{process} {base_error} /n {res:?} /n {:?} /n {:?}",
            &self.msg, &self.ctx
        )
    }
}
