use super::error::GrantError;
use crate::framework::ActorEntity;
use crate::model::AccessGrant;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for AccessGrant {
    type Id = String;
    /// The username the token authenticates.
    type Create = String;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = GrantError;

    fn assign_id(sequence: u32, _username: &String) -> String {
        format!("token_{}", sequence)
    }

    fn from_create_params(token: String, username: String) -> Result<Self, GrantError> {
        Ok(AccessGrant { token, username })
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), GrantError> {
        match action {}
    }
}
