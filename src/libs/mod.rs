pub mod clock;
pub mod config;
pub mod data_storage;
pub mod event;
pub mod formatter;
pub mod grouping;
pub mod messages;
pub mod time_worked;
pub mod tracker;
pub mod user;
pub mod view;
pub mod workday;
