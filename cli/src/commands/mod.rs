//! Command implementations for the StackIt CLI.
//!
//! Each command parses its own arguments, calls through the shared
//! [`crate::session::Session`], and prints either JSON (the default) or a
//! formatted rendition with `--human`. The human renditions for the shared
//! wire types live here so every command prints them the same way.

pub mod accept;
pub mod answer;
pub mod ask;
pub mod login;
pub mod notifications;
pub mod questions;
pub mod register;
pub mod show;
pub mod tags;
pub mod vote;
pub mod whoami;

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::api::*;

/// Types that can print a formatted, human-readable rendition.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Print JSON by default, or the human rendition with `--human`.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Render a timestamp for human output.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

// ============================================================================
// Human renditions for shared wire types
// ============================================================================

impl HumanReadable for AuthResponse {
    fn print_human(&self) {
        println!("{}", "Signed in".green().bold());
        println!("  {} {} <{}>", "User:".cyan(), self.user.name, self.user.email);
        println!("  {} {}", "Role:".cyan(), self.user.role);
        println!();
        println!("  {}", "Export the token for later commands:".dimmed());
        println!("  export STACKIT_TOKEN={}", self.token);
    }
}

impl HumanReadable for Profile {
    fn print_human(&self) {
        println!("{}", self.name.bold());
        println!("  {} {}", "Email:".cyan(), self.email);
        println!("  {} {}", "Role:".cyan(), self.role);
        println!("  {} {}", "Reputation:".cyan(), self.reputation);
        println!("  {} {}", "Member since:".cyan(), format_timestamp(&self.created));
    }
}

fn print_question_line(question: &Question) {
    println!("  {}", question.title.bold());
    println!("    {} {}", "ID:".cyan(), question.id);
    println!(
        "    {} {} by {} ({} rep)",
        "Asked:".cyan(),
        format_timestamp(&question.created),
        question.author.name,
        question.author.reputation
    );
    if !question.tags.is_empty() {
        println!("    {} {}", "Tags:".cyan(), question.tags.join(", "));
    }
    println!(
        "    {} {}",
        "Answers:".cyan(),
        question.answer_count
    );
}

impl HumanReadable for Question {
    fn print_human(&self) {
        print_question_line(self);
    }
}

impl HumanReadable for QuestionList {
    fn print_human(&self) {
        println!("{}", "Questions".green().bold());
        println!("{}", "=".repeat(72));
        println!();

        if self.questions.is_empty() {
            println!("  {}", "(No questions yet)".dimmed());
            return;
        }

        for question in &self.questions {
            print_question_line(question);
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.questions.len());
    }
}

impl HumanReadable for QuestionDetail {
    fn print_human(&self) {
        println!("{}", self.question.title.green().bold());
        println!("{}", "=".repeat(72));
        println!("{}", self.question.content);
        println!();
        println!(
            "  {} {} ({} rep), {}",
            "Asked by:".cyan(),
            self.question.author.name,
            self.question.author.reputation,
            format_timestamp(&self.question.created)
        );
        if !self.question.tags.is_empty() {
            println!("  {} {}", "Tags:".cyan(), self.question.tags.join(", "));
        }
        println!();

        if self.answers.is_empty() {
            println!("  {}", "(No answers yet)".dimmed());
            return;
        }

        println!("{}", format!("{} answer(s)", self.answers.len()).bold());
        for answer in &self.answers {
            let accepted = if answer.is_accepted {
                " [accepted]".green()
            } else {
                "".normal()
            };
            println!();
            println!(
                "  {} {} ({} rep){}",
                "From:".cyan(),
                answer.author.name,
                answer.author.reputation,
                accepted
            );
            println!("  {} {}", "ID:".cyan(), answer.id);
            println!(
                "  {} +{} / -{} (score {})",
                "Votes:".cyan(),
                answer.upvotes,
                answer.downvotes,
                answer.score
            );
            println!("  {}", answer.content);
        }
    }
}

impl HumanReadable for AnswerRecord {
    fn print_human(&self) {
        println!("{}", "Answer posted".green().bold());
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Question:".cyan(), self.question_id);
        println!("  {} {}", "Posted:".cyan(), format_timestamp(&self.created));
    }
}

impl HumanReadable for AcceptResult {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!("  {} {}", "Answer:".cyan(), self.answer.id);
        println!("  {} {}", "Question:".cyan(), self.answer.question_id);
    }
}

impl HumanReadable for VoteResult {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!("  {} {}", "Score now:".cyan(), self.score);
    }
}

impl HumanReadable for NotificationFeed {
    fn print_human(&self) {
        println!(
            "{} {}",
            "Notifications".green().bold(),
            format!("({} unread)", self.unread).dimmed()
        );
        println!("{}", "=".repeat(72));

        if self.notifications.is_empty() {
            println!("  {}", "(Nothing here)".dimmed());
            return;
        }

        for notification in &self.notifications {
            let marker = if notification.read {
                " ".normal()
            } else {
                "*".yellow()
            };
            println!(
                "  {} {} {}",
                marker,
                format_timestamp(&notification.created).dimmed(),
                notification.message
            );
        }
    }
}

impl HumanReadable for MarkReadResult {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!("  {} {}", "Updated:".cyan(), self.updated);
    }
}

impl HumanReadable for TagList {
    fn print_human(&self) {
        println!("{}", "Tags".green().bold());
        println!("{}", "=".repeat(72));

        if self.tags.is_empty() {
            println!("  {}", "(No tags in use)".dimmed());
            return;
        }

        for tag in &self.tags {
            println!("  {:>5}  {}", tag.count, tag.name.bold());
        }
    }
}
