//! ACCEPT command - Mark an answer as accepted (question owner only).

use anyhow::Result;
use clap::Args;
use uuid::Uuid;

use super::output;
use crate::session::Session;

/// Arguments for the accept command.
#[derive(Args)]
pub struct AcceptArgs {
    /// Answer ID to accept
    pub answer_id: Uuid,
}

/// Execute the accept command.
pub async fn execute(session: &mut Session, human: bool, args: AcceptArgs) -> Result<()> {
    let result = session.accept(args.answer_id).await?;

    output(&result, human)
}
