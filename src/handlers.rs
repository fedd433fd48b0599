use crate::dates::{day_key, parse_day_key, week_label, week_start};
use crate::errors::AppError;
use crate::history::{build_history, build_report};
use crate::models::{
    AssignmentView, HistoryQuery, HistoryResponse, Identity, MissionRecord, SessionRequest,
    SessionResponse, ToggleRequest, ToggleResponse,
};
use crate::records::{RecordStore, record_key};
use crate::session::{initialize_session, validate_owner};
use crate::state::AppState;
use crate::storage::KeyValueStore;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(&day_key(today())))
}

pub async fn start_session(
    State(state): State<AppState>,
    Json(payload): Json<SessionRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let today = today();
    let mut records = state.records.lock().await;
    let mut rng = state.rng.lock().await;

    let session = initialize_session(
        &mut *records,
        &state.catalogue,
        &mut *rng,
        &payload.owner,
        today,
    )?;
    info!(owner = %session.owner, degraded = session.degraded.is_some(), "session started");

    let week = week_start(today);
    Ok(Json(SessionResponse {
        daily: assignment_view(&*records, &session.daily),
        weekly: assignment_view(&*records, &session.weekly),
        history: build_report(&session.history),
        owner: session.owner,
        today: day_key(today),
        week_start: day_key(week),
        week_label: week_label(week),
        degraded: session.degraded,
    }))
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let owner = validate_owner(&query.owner)?;
    let records = state.records.lock().await;
    Ok(Json(build_report(&build_history(&*records, owner))))
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let owner = validate_owner(&payload.owner)?;
    let date = parse_day_key(payload.period_start.trim())?;
    let identity = Identity::new(owner, payload.scope, date);

    let mut records = state.records.lock().await;
    records.set_completed(&identity, payload.completed)?;

    Ok(Json(ToggleResponse {
        key: record_key(&identity),
        completed: records.get_completed(&identity),
    }))
}

fn assignment_view<S: KeyValueStore>(
    records: &RecordStore<S>,
    record: &MissionRecord,
) -> AssignmentView {
    AssignmentView {
        key: record_key(&record.identity),
        period_start: day_key(record.identity.period_start),
        mission: record.mission.clone(),
        completed: records.get_completed(&record.identity),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
