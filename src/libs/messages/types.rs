/// All user-facing message variants, grouped by feature area.
///
/// Message text lives in the `Display` implementation (`display.rs`) so
/// every string the application prints has a single source of truth.
#[derive(Debug, Clone)]
pub enum Message {
    // === WORKDAY MESSAGES ===
    WorkdayStarted,
    WorkdayEnded,
    WorkdayAlreadyTrackedToday,
    BreakStarted,
    BreakEnded,
    TimeWorkedToday(String), // formatted HH:MM:SS
    NoWorkdayYet,

    // === USER MESSAGES ===
    UserCreated(String, i64), // username, id
    UserSwitched(String),
    UserNotFound(i64),
    UsernameTaken(String),
    NoCurrentUser,
    NoUsersFound,
    UsersCount(i64),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
}
