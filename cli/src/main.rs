//! Command-line client for the StackIt Q&A forum.
//!
//! Commands:
//! - register / login: obtain a bearer token
//! - whoami: current profile
//! - ask: post a question
//! - questions: list questions (optionally by tag)
//! - show: one question with its answers
//! - answer: post an answer
//! - accept: mark an answer accepted
//! - vote: toggle an up/down vote on an answer
//! - notifications: read the feed or mark it read
//! - tags: tag usage counts
//!
//! Configuration via environment:
//! - STACKIT_URL: Base URL of the forum server (default: http://localhost:5000)
//! - STACKIT_TOKEN: JWT Bearer token for authenticated commands

mod api;
mod commands;
mod session;

use clap::{Parser, Subcommand};

use commands::{
    accept::AcceptArgs, answer::AnswerArgs, ask::AskArgs, login::LoginArgs,
    notifications::NotificationsArgs, questions::QuestionsArgs, register::RegisterArgs,
    show::ShowArgs, tags::TagsArgs, vote::VoteArgs, whoami::WhoamiArgs,
};
use session::Session;

/// StackIt forum CLI
///
/// Interact with the forum from the command line. JSON output by default,
/// formatted output with --human.
#[derive(Parser)]
#[command(name = "stackit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Forum server URL
    #[arg(
        long,
        env = "STACKIT_URL",
        default_value = "http://localhost:5000",
        global = true
    )]
    url: String,

    /// JWT Bearer token for authentication
    #[arg(long, env = "STACKIT_TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register(RegisterArgs),

    /// Log in with email and password
    Login(LoginArgs),

    /// Show the authenticated profile
    Whoami(WhoamiArgs),

    /// Post a new question
    Ask(AskArgs),

    /// List questions
    Questions(QuestionsArgs),

    /// Show a question with its answers
    Show(ShowArgs),

    /// Post an answer to a question
    Answer(AnswerArgs),

    /// Mark an answer as accepted
    Accept(AcceptArgs),

    /// Toggle a vote on an answer
    Vote(VoteArgs),

    /// List notifications or mark them read
    Notifications(NotificationsArgs),

    /// List tags in use
    Tags(TagsArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut session = match Session::new(&cli.url, cli.token.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Register(args) => commands::register::execute(&mut session, cli.human, args).await,
        Commands::Login(args) => commands::login::execute(&mut session, cli.human, args).await,
        Commands::Whoami(args) => commands::whoami::execute(&mut session, cli.human, args).await,
        Commands::Ask(args) => commands::ask::execute(&mut session, cli.human, args).await,
        Commands::Questions(args) => {
            commands::questions::execute(&mut session, cli.human, args).await
        }
        Commands::Show(args) => commands::show::execute(&mut session, cli.human, args).await,
        Commands::Answer(args) => commands::answer::execute(&mut session, cli.human, args).await,
        Commands::Accept(args) => commands::accept::execute(&mut session, cli.human, args).await,
        Commands::Vote(args) => commands::vote::execute(&mut session, cli.human, args).await,
        Commands::Notifications(args) => {
            commands::notifications::execute(&mut session, cli.human, args).await
        }
        Commands::Tags(args) => commands::tags::execute(&mut session, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
