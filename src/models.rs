use crate::dates::week_start;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Daily,
    Weekly,
}

/// Identifies one mission record and its completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    pub owner: String,
    pub scope: Scope,
    pub period_start: NaiveDate,
}

impl Identity {
    /// Anchors `date` to its period: the day itself for daily missions, the
    /// week start for weekly ones.
    pub fn new(owner: impl Into<String>, scope: Scope, date: NaiveDate) -> Self {
        let period_start = match scope {
            Scope::Daily => date,
            Scope::Weekly => week_start(date),
        };
        Self {
            owner: owner.into(),
            scope,
            period_start,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionRecord {
    pub identity: Identity,
    pub mission: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub display_label: String,
    pub period_start: NaiveDate,
    pub mission: String,
    pub scope: Scope,
    pub completed: bool,
    pub identity: Identity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: NaiveDate,
    pub entries: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub owner: String,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub owner: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub owner: String,
    pub scope: Scope,
    pub period_start: String,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub key: String,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssignmentView {
    pub key: String,
    pub period_start: String,
    pub mission: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct EntryView {
    pub key: String,
    pub label: String,
    pub period_start: String,
    pub scope: Scope,
    pub mission: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct GroupView {
    pub key: String,
    pub label: String,
    pub progress: Progress,
    pub entries: Vec<EntryView>,
}

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub progress: Progress,
    pub groups: Vec<GroupView>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub daily: SectionView,
    pub weekly: SectionView,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub owner: String,
    pub today: String,
    pub week_start: String,
    pub week_label: String,
    pub daily: AssignmentView,
    pub weekly: AssignmentView,
    pub degraded: Option<String>,
    pub history: HistoryResponse,
}
