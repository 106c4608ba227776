use crate::charts::ChartData;
use crate::day::Day;
use crate::ledger::{DayEntry, DerivedMetrics, WeeklySummary};
use crate::profile::Profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
    pub age: i64,
    pub vehicle_model: String,
    pub city: String,
}

#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    pub traveled: bool,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub distance_km: f64,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub day: Day,
    pub accepted: bool,
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<DerivedMetrics>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: WeeklySummary,
    pub charts: ChartData,
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SummaryState {
    NotRequested,
    Ready {
        summary: WeeklySummary,
        charts: ChartData,
    },
}

/// A stored entry together with the advisory shown under its card.
#[derive(Debug, Serialize)]
pub struct EntryView {
    #[serde(flatten)]
    pub entry: DayEntry,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub started_at: DateTime<Utc>,
    pub profile: Option<Profile>,
    pub entries: Vec<EntryView>,
    pub summary: SummaryState,
}
