//! First-time setup: create a user and select it for tracking.

use crate::db::users::Users;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::user::Settings;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Create the user without prompting, using this username.
    #[arg(short, long)]
    username: Option<String>,
    /// Paid break allowance in minutes for the new user.
    #[arg(short, long, default_value_t = 45)]
    paid_break: u32,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let settings = match init_args.username {
        Some(username) => Settings {
            username,
            paid_break_duration: i64::from(init_args.paid_break),
        },
        None => prompt_settings()?,
    };

    let mut users = Users::new()?;
    let id = users.insert(&settings)?;

    let mut config = Config::read()?;
    config.current_user_id = Some(id);
    config.save()?;

    msg_success!(Message::UserCreated(settings.username, id));
    msg_success!(Message::ConfigSaved);
    Ok(())
}

fn prompt_settings() -> Result<Settings> {
    let username: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Username")
        .interact_text()?;
    let paid_break: u32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Paid break allowance (minutes)")
        .default(45)
        .interact_text()?;

    Ok(Settings {
        username,
        paid_break_duration: i64::from(paid_break),
    })
}
