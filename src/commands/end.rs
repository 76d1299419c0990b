use crate::commands::current_user;
use crate::db::users::Users;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut users = Users::new()?;
    let mut user = current_user(&mut users)?;

    let mut tracker = Tracker::new(&mut user);
    tracker.end_workday()?;
    let time_worked = tracker.time_worked();
    drop(tracker);

    users.update(&user)?;
    msg_success!(Message::WorkdayEnded);
    msg_info!(Message::TimeWorkedToday(time_worked.to_string()));
    Ok(())
}
