//! SHOW command - A question with all its answers.

use anyhow::Result;
use clap::Args;
use uuid::Uuid;

use super::output;
use crate::session::Session;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Question ID
    pub id: Uuid,
}

/// Execute the show command.
pub async fn execute(session: &mut Session, human: bool, args: ShowArgs) -> Result<()> {
    let detail = session.question(args.id).await?;

    output(&detail, human)
}
