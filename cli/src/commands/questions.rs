//! QUESTIONS command - List questions, optionally filtered by tag.

use anyhow::Result;
use clap::Args;

use super::output;
use crate::api::QuestionList;
use crate::session::Session;

/// Arguments for the questions command.
#[derive(Args)]
pub struct QuestionsArgs {
    /// Only questions carrying this tag (exact match)
    #[arg(long)]
    pub tag: Option<String>,
}

/// Execute the questions command.
pub async fn execute(session: &mut Session, human: bool, args: QuestionsArgs) -> Result<()> {
    let questions = match &args.tag {
        Some(tag) => session.questions_tagged(tag).await?,
        None => session.question_list().await?,
    };

    output(&QuestionList { questions }, human)
}
