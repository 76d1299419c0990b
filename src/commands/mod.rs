pub mod breaks;
pub mod end;
pub mod init;
pub mod start;
pub mod status;
pub mod users;

use crate::db::users::Users;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::user::User;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create a user and select it for tracking")]
    Init(init::InitArgs),
    #[command(about = "Start the workday")]
    Start,
    #[command(about = "End the workday")]
    End,
    #[command(about = "Start or end a break", name = "break")]
    Break(breaks::BreakArgs),
    #[command(about = "Show time worked and today's events")]
    Status,
    #[command(about = "List users or switch the active one")]
    Users(users::UsersArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Start => start::cmd(),
            Commands::End => end::cmd(),
            Commands::Break(args) => breaks::cmd(args),
            Commands::Status => status::cmd(),
            Commands::Users(args) => users::cmd(args),
        }
    }
}

/// Loads the user selected in the configuration file.
pub(crate) fn current_user(users: &mut Users) -> Result<User> {
    let id = Config::read()?.current_user_id()?;
    users
        .fetch(id)?
        .ok_or_else(|| msg_error_anyhow!(Message::UserNotFound(id)))
}
