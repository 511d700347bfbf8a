//! LOGIN command - Exchange credentials for a token.

use anyhow::Result;
use clap::Args;

use super::output;
use crate::session::Session;

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address
    #[arg(long)]
    pub email: String,

    /// Password
    #[arg(long)]
    pub password: String,
}

/// Execute the login command.
pub async fn execute(session: &mut Session, human: bool, args: LoginArgs) -> Result<()> {
    let response = session.login(&args.email, &args.password).await?;

    output(&response, human)
}
