//! REGISTER command - Create an account and receive a token.

use anyhow::Result;
use clap::Args;

use super::output;
use crate::session::Session;

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address (login identity)
    #[arg(long)]
    pub email: String,

    /// Password
    #[arg(long)]
    pub password: String,
}

/// Execute the register command.
pub async fn execute(session: &mut Session, human: bool, args: RegisterArgs) -> Result<()> {
    let response = session
        .register(&args.name, &args.email, &args.password)
        .await?;

    output(&response, human)
}
