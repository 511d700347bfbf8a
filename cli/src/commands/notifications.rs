//! NOTIFICATIONS command - Read the feed or mark everything read.

use anyhow::Result;
use clap::Args;

use super::output;
use crate::session::Session;

/// Arguments for the notifications command.
#[derive(Args)]
pub struct NotificationsArgs {
    /// Mark all notifications as read instead of listing them
    #[arg(long)]
    pub mark_read: bool,
}

/// Execute the notifications command.
pub async fn execute(session: &mut Session, human: bool, args: NotificationsArgs) -> Result<()> {
    if args.mark_read {
        let result = session.mark_notifications_read().await?;
        return output(&result, human);
    }

    let feed = session.notifications().await?;
    output(&feed, human)
}
