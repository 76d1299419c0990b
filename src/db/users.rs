//! User store: settings and tracking history, one row per user.
//!
//! The tracker core never touches storage itself. Commands load a user,
//! drive the tracker over it, then persist the updated row here after each
//! successful mutation. Usernames are unique; the tracking history is kept
//! as a JSON document since the core is agnostic to its encoding.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::user::{Settings, User};
use crate::libs::workday::TrackingData;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER NOT NULL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    paid_break_duration INTEGER NOT NULL,
    tracking_data TEXT NOT NULL
)";
const INSERT_USER: &str = "INSERT INTO users (username, paid_break_duration, tracking_data) VALUES (?1, ?2, ?3)";
const UPDATE_USER: &str = "UPDATE users SET username = ?1, paid_break_duration = ?2, tracking_data = ?3 WHERE id = ?4";
const SELECT_USER: &str = "SELECT id, username, paid_break_duration, tracking_data FROM users WHERE id = ?1";
const SELECT_ALL_USERS: &str = "SELECT id, username, paid_break_duration, tracking_data FROM users ORDER BY id";
const COUNT_USERS: &str = "SELECT COUNT(*) FROM users";

pub struct Users {
    conn: Connection,
}

impl Users {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_USERS, [])?;
        Ok(Users { conn: db.conn })
    }

    /// Creates a user with empty tracking data and returns its id. Fails
    /// if the username is already taken.
    pub fn insert(&mut self, settings: &Settings) -> Result<i64> {
        let tracking_data = serde_json::to_string(&TrackingData::default())?;
        let result = self.conn.execute(
            INSERT_USER,
            params![settings.username, settings.paid_break_duration, tracking_data],
        );
        match result {
            Ok(_) => Ok(self.conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(error, _))
                if error.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(msg_error_anyhow!(Message::UsernameTaken(settings.username.clone())))
            }
            Err(error) => Err(error.into()),
        }
    }

    pub fn fetch(&mut self, id: i64) -> Result<Option<User>> {
        let user = self.conn.query_row(SELECT_USER, [id], row_to_user).optional()?;
        Ok(user)
    }

    /// Replaces the stored settings and tracking data for the user's id.
    pub fn update(&mut self, user: &User) -> Result<()> {
        let tracking_data = serde_json::to_string(&user.tracking_data)?;
        self.conn.execute(
            UPDATE_USER,
            params![
                user.settings.username,
                user.settings.paid_break_duration,
                tracking_data,
                user.id
            ],
        )?;
        Ok(())
    }

    pub fn fetch_all(&mut self) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_USERS)?;
        let user_iter = stmt.query_map([], row_to_user)?;
        let mut users = Vec::new();
        for user in user_iter {
            users.push(user?);
        }
        Ok(users)
    }

    pub fn count(&mut self) -> Result<i64> {
        let count = self.conn.query_row(COUNT_USERS, [], |row| row.get(0))?;
        Ok(count)
    }
}

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    let tracking_data: String = row.get(3)?;
    Ok(User {
        id: row.get(0)?,
        settings: Settings {
            username: row.get(1)?,
            paid_break_duration: row.get(2)?,
        },
        tracking_data: serde_json::from_str(&tracking_data).unwrap(),
    })
}
