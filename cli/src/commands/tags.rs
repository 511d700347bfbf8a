//! TAGS command - List tags in use with question counts.

use anyhow::Result;
use clap::Args;

use super::output;
use crate::session::Session;

/// Arguments for the tags command.
#[derive(Args)]
pub struct TagsArgs {
    // No additional arguments needed
}

/// Execute the tags command.
pub async fn execute(session: &mut Session, human: bool, _args: TagsArgs) -> Result<()> {
    let tags = session.tags().await?;

    output(&tags, human)
}
