//! ANSWER command - Post an answer to a question.

use anyhow::Result;
use clap::Args;
use uuid::Uuid;

use super::output;
use crate::session::Session;

/// Arguments for the answer command.
#[derive(Args)]
pub struct AnswerArgs {
    /// Question ID to answer
    pub question_id: Uuid,

    /// Answer body
    #[arg(long)]
    pub content: String,
}

/// Execute the answer command.
pub async fn execute(session: &mut Session, human: bool, args: AnswerArgs) -> Result<()> {
    let answer = session.post_answer(args.question_id, &args.content).await?;

    output(&answer, human)
}
