use crate::libs::workday::TrackingData;
use serde::{Deserialize, Serialize};

/// Per-user tracking preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub username: String,
    /// Paid break allowance in minutes, applied to workdays started after
    /// the setting changes. Already-open workdays keep their snapshot.
    pub paid_break_duration: i64,
}

/// A tracked user: settings plus the workday history the tracker mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub settings: Settings,
    pub tracking_data: TrackingData,
}
