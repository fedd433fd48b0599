use crate::dates::{day_key, month_label, month_start, week_label, week_start};
use crate::models::{
    EntryView, Group, GroupView, HistoryEntry, HistoryResponse, Progress, Scope, SectionView,
};
use crate::records::{RecordStore, record_key};
use crate::storage::KeyValueStore;
use std::collections::BTreeMap;

/// Every mission the owner has been assigned, newest first.
pub fn build_history<S: KeyValueStore>(records: &RecordStore<S>, owner: &str) -> Vec<HistoryEntry> {
    let mut entries: Vec<HistoryEntry> = records
        .list_all_for_owner(owner)
        .into_iter()
        .map(|record| {
            let completed = records.get_completed(&record.identity);
            let day = day_key(record.identity.period_start);
            let display_label = match record.identity.scope {
                Scope::Daily => day,
                Scope::Weekly => format!("{day} (weekly)"),
            };
            HistoryEntry {
                display_label,
                period_start: record.identity.period_start,
                mission: record.mission,
                scope: record.identity.scope,
                completed,
                identity: record.identity,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.period_start
            .cmp(&a.period_start)
            .then(a.scope.cmp(&b.scope))
    });
    entries
}

/// Buckets the entries of `scope`: daily missions by week, weekly missions by
/// month. Groups come out newest first.
pub fn group_by_bucket(entries: &[HistoryEntry], scope: Scope) -> Vec<Group> {
    let mut buckets: BTreeMap<_, Vec<HistoryEntry>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.scope == scope) {
        let key = match scope {
            Scope::Daily => week_start(entry.period_start),
            Scope::Weekly => month_start(entry.period_start),
        };
        buckets.entry(key).or_default().push(entry.clone());
    }

    buckets
        .into_iter()
        .rev()
        .map(|(key, entries)| Group { key, entries })
        .collect()
}

pub fn progress(entries: &[HistoryEntry]) -> Progress {
    let total = entries.len();
    let completed = entries.iter().filter(|e| e.completed).count();
    let percent = if total == 0 {
        0
    } else {
        (completed as f64 * 100.0 / total as f64).round() as u8
    };
    Progress {
        completed,
        total,
        percent,
    }
}

pub fn build_report(entries: &[HistoryEntry]) -> HistoryResponse {
    HistoryResponse {
        daily: build_section(entries, Scope::Daily),
        weekly: build_section(entries, Scope::Weekly),
    }
}

fn build_section(entries: &[HistoryEntry], scope: Scope) -> SectionView {
    let scoped: Vec<HistoryEntry> = entries.iter().filter(|e| e.scope == scope).cloned().collect();

    let groups = group_by_bucket(&scoped, scope)
        .into_iter()
        .map(|group| GroupView {
            key: day_key(group.key),
            label: match scope {
                Scope::Daily => week_label(group.key),
                Scope::Weekly => month_label(group.key),
            },
            progress: progress(&group.entries),
            entries: group.entries.iter().map(entry_view).collect(),
        })
        .collect();

    SectionView {
        progress: progress(&scoped),
        groups,
    }
}

fn entry_view(entry: &HistoryEntry) -> EntryView {
    EntryView {
        key: record_key(&entry.identity),
        label: entry.display_label.clone(),
        period_start: day_key(entry.period_start),
        scope: entry.scope,
        mission: entry.mission.clone(),
        completed: entry.completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Identity;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(scope: Scope, date: NaiveDate, completed: bool) -> HistoryEntry {
        let identity = Identity::new("hana", scope, date);
        HistoryEntry {
            display_label: day_key(identity.period_start),
            period_start: identity.period_start,
            mission: format!("mission for {date}"),
            scope,
            completed,
            identity,
        }
    }

    fn seeded_store() -> RecordStore<MemoryStore> {
        let mut store = MemoryStore::new();
        store.set("mission-hana-2025-02-03", "walk").unwrap();
        store.set("mission-hana-2025-02-08", "write").unwrap();
        store.set("mission-hana-2025-02-02", "rest").unwrap();
        store.set("weekly-hana-2025-02-02", "read").unwrap();
        store.set("weekly-hana-2025-01-26", "call").unwrap();
        store.set("checked-hana-mission-hana-2025-02-03", "true").unwrap();
        store.set("checked-hana-weekly-hana-2025-01-26", "true").unwrap();
        store.set("mission-yujin-2025-02-04", "other").unwrap();
        RecordStore::new(store)
    }

    #[test]
    fn history_is_sorted_newest_first_with_daily_before_weekly() {
        let history = build_history(&seeded_store(), "hana");
        assert_eq!(history.len(), 5);
        assert!(history.windows(2).all(|w| w[0].period_start >= w[1].period_start));

        let labels: Vec<&str> = history.iter().map(|e| e.display_label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "2025-02-08",
                "2025-02-03",
                "2025-02-02",
                "2025-02-02 (weekly)",
                "2025-01-26 (weekly)",
            ]
        );
    }

    #[test]
    fn history_joins_completion_flags() {
        let history = build_history(&seeded_store(), "hana");
        let done: Vec<&str> = history
            .iter()
            .filter(|e| e.completed)
            .map(|e| e.mission.as_str())
            .collect();
        assert_eq!(done, vec!["walk", "call"]);
    }

    #[test]
    fn daily_entries_group_by_week_start() {
        let entries = vec![
            entry(Scope::Daily, ymd(2025, 2, 8), false),
            entry(Scope::Daily, ymd(2025, 2, 3), false),
            entry(Scope::Daily, ymd(2025, 2, 2), false),
        ];
        assert_eq!(week_start(ymd(2025, 2, 8)), ymd(2025, 2, 2));

        let groups = group_by_bucket(&entries, Scope::Daily);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, ymd(2025, 2, 2));
        assert_eq!(groups[0].entries.len(), 3);

        let entries = vec![
            entry(Scope::Daily, ymd(2025, 2, 9), false),
            entry(Scope::Daily, ymd(2025, 2, 3), false),
            entry(Scope::Daily, ymd(2025, 2, 2), false),
        ];
        let groups = group_by_bucket(&entries, Scope::Daily);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, ymd(2025, 2, 9));
        assert_eq!(groups[0].entries.len(), 1);
        assert_eq!(groups[1].key, ymd(2025, 2, 2));
        assert_eq!(groups[1].entries.len(), 2);
    }

    #[test]
    fn weekly_entries_group_by_month_start() {
        let entries = vec![
            entry(Scope::Weekly, ymd(2025, 2, 23), false),
            entry(Scope::Weekly, ymd(2025, 2, 2), true),
            entry(Scope::Weekly, ymd(2025, 1, 26), false),
            entry(Scope::Daily, ymd(2025, 2, 3), true),
        ];
        let groups = group_by_bucket(&entries, Scope::Weekly);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, ymd(2025, 2, 1));
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[1].key, ymd(2025, 1, 1));
    }

    #[test]
    fn progress_rounds_percent() {
        let entries = vec![
            entry(Scope::Daily, ymd(2025, 2, 3), true),
            entry(Scope::Daily, ymd(2025, 2, 4), false),
            entry(Scope::Daily, ymd(2025, 2, 5), true),
        ];
        assert_eq!(
            progress(&entries),
            Progress {
                completed: 2,
                total: 3,
                percent: 67
            }
        );
    }

    #[test]
    fn progress_of_nothing_is_zero() {
        assert_eq!(progress(&[]), Progress::default());
    }

    #[test]
    fn report_labels_groups() {
        let history = build_history(&seeded_store(), "hana");
        let report = build_report(&history);

        assert_eq!(report.daily.progress.total, 3);
        assert_eq!(report.daily.progress.percent, 33);
        assert_eq!(report.daily.groups.len(), 1);
        assert_eq!(report.daily.groups[0].label, "2025-02-02 ~ 2025-02-08");
        assert_eq!(report.daily.groups[0].progress.completed, 1);
        assert_eq!(report.daily.groups[0].entries.len(), 3);

        assert_eq!(report.weekly.groups.len(), 2);
        assert_eq!(report.weekly.groups[0].label, "2025-02");
        assert_eq!(report.weekly.groups[1].label, "2025-01");
        assert_eq!(report.weekly.groups[1].progress.percent, 100);
        assert_eq!(report.weekly.groups[1].entries[0].key, "weekly-hana-2025-01-26");
    }
}
