use crate::charts::build_charts;
use crate::day::Day;
use crate::errors::AppError;
use crate::format::{entry_message, format_amount, format_km};
use crate::ledger::derive_metrics;
use crate::models::{
    EntryRequest, EntryResponse, EntryView, ProfileRequest, SessionResponse, SummaryResponse,
    SummaryState,
};
use crate::profile::Profile;
use crate::session::{Session, SummaryView};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use chrono::{Datelike, Local};
use tracing::{info, warn};

pub async fn index() -> Html<String> {
    let today = Day::from(Local::now().weekday());
    Html(render_index(today))
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.lock().await;
    Json(to_session_response(&session))
}

pub async fn reset_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut session = state.session.lock().await;
    session.reset();
    info!("session reset");
    Json(to_session_response(&session))
}

pub async fn put_profile(
    State(state): State<AppState>,
    Json(payload): Json<ProfileRequest>,
) -> Result<Json<Profile>, AppError> {
    let profile = Profile::new(
        &payload.name,
        payload.age,
        &payload.vehicle_model,
        &payload.city,
    )
    .inspect_err(|err| warn!("profile rejected: {err}"))?;

    let mut session = state.session.lock().await;
    let profile = session.set_profile(profile)?.clone();
    info!(city = profile.city(), vehicle = profile.vehicle_model(), "profile set");
    Ok(Json(profile))
}

pub async fn put_entry(
    State(state): State<AppState>,
    Path(day): Path<String>,
    Json(payload): Json<EntryRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let day: Day = day.parse()?;

    let mut session = state.session.lock().await;
    let result = session.record(
        day,
        payload.traveled,
        &payload.destination,
        payload.distance_km,
    );

    let response = match result {
        Ok(entry) => {
            info!(%day, traveled = entry.traveled, distance_km = entry.distance_km, "entry recorded");
            EntryResponse {
                day,
                accepted: true,
                status: if entry.traveled { "recorded" } else { "not_traveled" },
                message: entry_message(day, Ok(entry)),
                metrics: entry.qualifies().then(|| derive_metrics(entry)),
            }
        }
        Err(err) => {
            warn!(%day, reason = err.code(), "entry not accepted");
            EntryResponse {
                day,
                accepted: false,
                status: err.code(),
                message: entry_message(day, Err(err)),
                metrics: None,
            }
        }
    };

    Ok(Json(response))
}

pub async fn request_summary(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    let mut session = state.session.lock().await;
    let summary = session.request_summary()?.clone();
    info!(
        days = summary.breakdown.len(),
        total_km = %format_km(summary.total_km),
        total_cost_rs = %format_amount(summary.total_cost_rs),
        "summary requested"
    );

    Ok(Json(SummaryResponse {
        charts: build_charts(&summary),
        summary,
    }))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryState> {
    let session = state.session.lock().await;
    Json(to_summary_state(&session))
}

fn to_summary_state(session: &Session) -> SummaryState {
    match session.summary_view() {
        SummaryView::NotRequested => SummaryState::NotRequested,
        SummaryView::Ready(summary) => SummaryState::Ready {
            charts: build_charts(summary),
            summary: summary.clone(),
        },
    }
}

fn to_session_response(session: &Session) -> SessionResponse {
    SessionResponse {
        started_at: session.started_at(),
        profile: session.profile().cloned(),
        entries: session
            .ledger()
            .entries()
            .map(|entry| EntryView {
                message: entry_message(entry.day, Ok(entry)),
                entry: entry.clone(),
            })
            .collect(),
        summary: to_summary_state(session),
    }
}
