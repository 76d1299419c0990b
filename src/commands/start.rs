use crate::commands::current_user;
use crate::db::users::Users;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::{msg_success, msg_warning};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut users = Users::new()?;
    let mut user = current_user(&mut users)?;

    let mut tracker = Tracker::new(&mut user);
    // One workday per calendar day: a closed workday from earlier today
    // blocks a restart, while an open one falls through to the transition
    // error below.
    if !tracker.can_start_workday() && !tracker.has_workday_started() {
        msg_warning!(Message::WorkdayAlreadyTrackedToday);
        return Ok(());
    }
    tracker.start_workday()?;
    drop(tracker);

    users.update(&user)?;
    msg_success!(Message::WorkdayStarted);
    Ok(())
}
