//! WHOAMI command - Show the authenticated profile.

use anyhow::Result;
use clap::Args;

use super::output;
use crate::session::Session;

/// Arguments for the whoami command.
#[derive(Args)]
pub struct WhoamiArgs {
    // No additional arguments needed
}

/// Execute the whoami command.
pub async fn execute(session: &mut Session, human: bool, _args: WhoamiArgs) -> Result<()> {
    let profile = session.profile().await?;

    output(&profile, human)
}
