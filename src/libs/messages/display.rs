//! Display implementation for application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! in the terminal. Keeping all message text in one place gives consistent
//! wording and leaves the call sites free of string literals.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === WORKDAY MESSAGES ===
            Message::WorkdayStarted => "Workday started. Have a good one!".to_string(),
            Message::WorkdayEnded => "Workday ended.".to_string(),
            Message::WorkdayAlreadyTrackedToday => {
                "A workday was already tracked today. A new one can start tomorrow.".to_string()
            }
            Message::BreakStarted => "Break started.".to_string(),
            Message::BreakEnded => "Break ended. Back to work.".to_string(),
            Message::TimeWorkedToday(time) => format!("Time worked today: {}", time),
            Message::NoWorkdayYet => "No workday has been tracked yet. Run 'workhours start' to begin.".to_string(),

            // === USER MESSAGES ===
            Message::UserCreated(username, id) => format!("User '{}' created with id {}", username, id),
            Message::UserSwitched(username) => format!("Now tracking as '{}'", username),
            Message::UserNotFound(id) => format!("No user found with id {}", id),
            Message::UsernameTaken(username) => format!("Username '{}' is already taken", username),
            Message::NoCurrentUser => "No user selected. Run 'workhours init' first.".to_string(),
            Message::NoUsersFound => "No users found. Run 'workhours init' to create one.".to_string(),
            Message::UsersCount(count) => format!("{} user(s) total", count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
        };
        write!(f, "{}", text)
    }
}
