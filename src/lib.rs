pub mod app;
pub mod charts;
pub mod config;
pub mod day;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod profile;
pub mod session;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::AppConfig;
pub use day::Day;
pub use ledger::{DayEntry, DerivedMetrics, TravelLedger, WeeklySummary, derive_metrics};
pub use state::AppState;
