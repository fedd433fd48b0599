use crate::catalogue::Catalogue;
use crate::errors::MissionError;
use crate::history::build_history;
use crate::models::{HistoryEntry, MissionRecord, Scope};
use crate::records::{Lookup, RecordStore};
use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use rand::Rng;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Session {
    pub owner: String,
    pub today: NaiveDate,
    pub daily: MissionRecord,
    pub weekly: MissionRecord,
    /// Set when an assignment could not be saved and is only held for this
    /// session.
    pub degraded: Option<String>,
    pub history: Vec<HistoryEntry>,
}

pub fn validate_owner(raw: &str) -> Result<&str, MissionError> {
    let owner = raw.trim();
    if owner.is_empty() {
        return Err(MissionError::EmptyInput);
    }
    Ok(owner)
}

/// Ensures today's and this week's missions exist for `owner` and reads back
/// the owner's history.
pub fn initialize_session<S, R>(
    records: &mut RecordStore<S>,
    catalogue: &Catalogue,
    rng: &mut R,
    owner: &str,
    today: NaiveDate,
) -> Result<Session, MissionError>
where
    S: KeyValueStore,
    R: Rng + ?Sized,
{
    let owner = validate_owner(owner)?;
    let mut degraded = None;

    let daily = ensure_assignment(
        records,
        owner,
        Scope::Daily,
        today,
        &catalogue.daily,
        rng,
        &mut degraded,
    )?;
    let weekly = ensure_assignment(
        records,
        owner,
        Scope::Weekly,
        today,
        &catalogue.weekly,
        rng,
        &mut degraded,
    )?;

    Ok(Session {
        owner: owner.to_string(),
        today,
        daily,
        weekly,
        degraded,
        history: build_history(records, owner),
    })
}

fn ensure_assignment<S, R>(
    records: &mut RecordStore<S>,
    owner: &str,
    scope: Scope,
    today: NaiveDate,
    pool: &[String],
    rng: &mut R,
    degraded: &mut Option<String>,
) -> Result<MissionRecord, MissionError>
where
    S: KeyValueStore,
    R: Rng + ?Sized,
{
    let record = match records.lookup_or_draw(owner, scope, today, pool, rng)? {
        Lookup::Existing(record) => return Ok(record),
        Lookup::Drawn(record) => record,
    };
    match records.insert(&record) {
        Ok(()) => Ok(record),
        Err(MissionError::StoreUnavailable(reason)) => {
            warn!(?scope, "mission not saved, keeping it for this session only: {reason}");
            *degraded = Some(reason);
            Ok(record)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::tests::CountingRng;
    use crate::storage::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), MissionError> {
            Err(MissionError::StoreUnavailable("quota exceeded".into()))
        }

        fn keys(&self) -> Vec<String> {
            Vec::new()
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn blank_owner_is_rejected_before_store_access() {
        let mut records = RecordStore::new(MemoryStore::new());
        let mut rng = CountingRng::new(1);
        let result = initialize_session(&mut records, &Catalogue::default(), &mut rng, "   ", ymd(2025, 2, 3));
        assert!(matches!(result, Err(MissionError::EmptyInput)));
        assert!(records.store().keys().is_empty());
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn session_assigns_daily_and_weekly_once() {
        let mut records = RecordStore::new(MemoryStore::new());
        let catalogue = Catalogue::default();
        let mut rng = StdRng::seed_from_u64(11);

        let first = initialize_session(&mut records, &catalogue, &mut rng, " hana ", ymd(2025, 2, 4)).unwrap();
        assert_eq!(first.owner, "hana");
        assert!(first.degraded.is_none());
        assert_eq!(first.weekly.identity.period_start, ymd(2025, 2, 2));
        assert!(catalogue.daily.contains(&first.daily.mission));
        assert!(catalogue.weekly.contains(&first.weekly.mission));
        assert_eq!(first.history.len(), 2);

        let again = initialize_session(&mut records, &catalogue, &mut rng, "hana", ymd(2025, 2, 4)).unwrap();
        assert_eq!(again.daily, first.daily);
        assert_eq!(again.weekly, first.weekly);
        assert_eq!(records.store().keys().len(), 2);
    }

    #[test]
    fn next_day_keeps_weekly_and_adds_daily() {
        let mut records = RecordStore::new(MemoryStore::new());
        let catalogue = Catalogue::default();
        let mut rng = StdRng::seed_from_u64(5);

        let monday = initialize_session(&mut records, &catalogue, &mut rng, "hana", ymd(2025, 2, 3)).unwrap();
        let tuesday = initialize_session(&mut records, &catalogue, &mut rng, "hana", ymd(2025, 2, 4)).unwrap();
        assert_eq!(monday.weekly, tuesday.weekly);
        assert_eq!(tuesday.history.len(), 3);
        assert_eq!(tuesday.history[0].period_start, ymd(2025, 2, 4));
    }

    #[test]
    fn unavailable_store_degrades_instead_of_failing() {
        let mut records = RecordStore::new(FailingStore);
        let catalogue = Catalogue::default();
        let mut rng = StdRng::seed_from_u64(2);

        let session = initialize_session(&mut records, &catalogue, &mut rng, "hana", ymd(2025, 2, 3)).unwrap();
        assert_eq!(session.degraded.as_deref(), Some("quota exceeded"));
        assert!(catalogue.daily.contains(&session.daily.mission));
        assert!(session.history.is_empty());
    }

    #[test]
    fn degraded_session_keeps_the_seeded_draw() {
        let catalogue = Catalogue::default();

        let mut healthy = RecordStore::new(MemoryStore::new());
        let saved = initialize_session(
            &mut healthy,
            &catalogue,
            &mut StdRng::seed_from_u64(21),
            "hana",
            ymd(2025, 2, 3),
        )
        .unwrap();

        let mut failing = RecordStore::new(FailingStore);
        let mut rng = CountingRng::new(21);
        let transient = initialize_session(&mut failing, &catalogue, &mut rng, "hana", ymd(2025, 2, 3)).unwrap();
        let draws = rng.calls;
        assert!(transient.degraded.is_some());
        assert_eq!(transient.daily, saved.daily);
        assert_eq!(transient.weekly, saved.weekly);

        let mut counted = RecordStore::new(MemoryStore::new());
        let mut rng = CountingRng::new(21);
        initialize_session(&mut counted, &catalogue, &mut rng, "hana", ymd(2025, 2, 3)).unwrap();
        assert_eq!(rng.calls, draws);
    }
}
