use crate::commands::current_user;
use crate::db::users::Users;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::msg_success;
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::fmt;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum BreakAction {
    #[default]
    Start,
    End,
}

impl fmt::Display for BreakAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Args)]
pub struct BreakArgs {
    #[arg(
        default_value_t = BreakAction::Start,
        value_enum
    )]
    action: BreakAction,
}

pub fn cmd(break_args: BreakArgs) -> Result<()> {
    let mut users = Users::new()?;
    let mut user = current_user(&mut users)?;

    let mut tracker = Tracker::new(&mut user);
    let message = match break_args.action {
        BreakAction::Start => {
            tracker.start_break()?;
            Message::BreakStarted
        }
        BreakAction::End => {
            tracker.end_break()?;
            Message::BreakEnded
        }
    };
    drop(tracker);

    users.update(&user)?;
    msg_success!(message);
    Ok(())
}
