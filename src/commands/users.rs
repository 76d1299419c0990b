use crate::db::users::Users;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UsersArgs {
    /// Switch the active user by id.
    #[arg(short, long)]
    switch: Option<i64>,
}

pub fn cmd(users_args: UsersArgs) -> Result<()> {
    let mut users = Users::new()?;

    if let Some(id) = users_args.switch {
        let user = match users.fetch(id)? {
            Some(user) => user,
            None => msg_bail_anyhow!(Message::UserNotFound(id)),
        };

        let mut config = Config::read()?;
        config.current_user_id = Some(user.id);
        config.save()?;

        msg_success!(Message::UserSwitched(user.settings.username));
        return Ok(());
    }

    let all_users = users.fetch_all()?;
    if all_users.is_empty() {
        msg_info!(Message::NoUsersFound);
        return Ok(());
    }

    View::users(&all_users)?;
    msg_print!(Message::UsersCount(users.count()?));
    Ok(())
}
