//! VOTE command - Toggle a vote on an answer.

use anyhow::Result;
use clap::Args;
use uuid::Uuid;

use super::output;
use crate::session::Session;

/// Arguments for the vote command.
#[derive(Args)]
pub struct VoteArgs {
    /// Answer ID to vote on
    pub answer_id: Uuid,

    /// Vote direction; repeating the same direction retracts the vote
    #[arg(value_parser = ["up", "down"])]
    pub direction: String,
}

/// Execute the vote command.
pub async fn execute(session: &mut Session, human: bool, args: VoteArgs) -> Result<()> {
    let result = session.vote(args.answer_id, &args.direction).await?;

    output(&result, human)
}
