use crate::libs::formatter::{format_duration, FormattedEvent};
use crate::libs::grouping::GroupedEvent;
use crate::libs::user::User;
use anyhow::Result;
use chrono::Duration;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn events(groups: &[GroupedEvent]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "EVENT", "START", "END", "DURATION"]);
        for (index, group) in groups.iter().enumerate() {
            let event = FormattedEvent {
                id: (index + 1) as i32,
                start: group.start.format("%H:%M:%S").to_string(),
                end: group
                    .end
                    .map_or_else(|| "-".to_string(), |e| e.format("%H:%M:%S").to_string()),
                duration: group
                    .duration
                    .map_or_else(|| "--:--:--".to_string(), |d| d.to_string()),
            };
            table.add_row(row![event.id, group.kind, event.start, event.end, event.duration]);
        }
        table.printstd();

        Ok(())
    }

    pub fn users(users: &Vec<User>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "USERNAME", "PAID BREAK", "WORKDAYS"]);
        for user in users {
            table.add_row(row![
                user.id,
                user.settings.username,
                format_duration(&Duration::minutes(user.settings.paid_break_duration)),
                user.tracking_data.workdays.len()
            ]);
        }
        table.printstd();

        Ok(())
    }
}
