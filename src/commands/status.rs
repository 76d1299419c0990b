use crate::commands::current_user;
use crate::db::users::Users;
use crate::libs::grouping::group_workday_events;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let mut users = Users::new()?;
    let mut user = current_user(&mut users)?;

    let tracker = Tracker::new(&mut user);
    let time_worked = tracker.time_worked();
    let events = tracker.current_workday_events();

    if events.is_empty() {
        msg_print!(Message::NoWorkdayYet);
        return Ok(());
    }

    msg_info!(Message::TimeWorkedToday(time_worked.to_string()));
    let grouped = group_workday_events(&events, Local::now().naive_local());
    View::events(&grouped)?;
    Ok(())
}
