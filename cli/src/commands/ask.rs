//! ASK command - Post a new question.

use anyhow::Result;
use clap::Args;

use super::output;
use crate::session::Session;

/// Arguments for the ask command.
#[derive(Args)]
pub struct AskArgs {
    /// Question title
    #[arg(long)]
    pub title: String,

    /// Question body (rich text passed through verbatim)
    #[arg(long)]
    pub content: String,

    /// Tags (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

/// Execute the ask command.
pub async fn execute(session: &mut Session, human: bool, args: AskArgs) -> Result<()> {
    let question = session
        .ask(&args.title, &args.content, &args.tags)
        .await?;

    output(&question, human)
}
