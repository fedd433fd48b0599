use crate::catalogue::pick_n;
use crate::dates::{day_key, parse_day_key, week_start};
use crate::errors::MissionError;
use crate::models::{Identity, MissionRecord, Scope};
use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info, warn};

const DAILY_PREFIX: &str = "mission-";
const WEEKLY_PREFIX: &str = "weekly-";
const CHECKED_PREFIX: &str = "checked-";
// "-YYYY-MM-DD"
const DATE_SUFFIX_LEN: usize = 11;

pub fn record_key(identity: &Identity) -> String {
    let prefix = match identity.scope {
        Scope::Daily => DAILY_PREFIX,
        Scope::Weekly => WEEKLY_PREFIX,
    };
    format!("{prefix}{}-{}", identity.owner, day_key(identity.period_start))
}

pub fn completion_key(identity: &Identity) -> String {
    format!("{CHECKED_PREFIX}{}-{}", identity.owner, record_key(identity))
}

/// Inverse of [`record_key`]. The date is read from the fixed-width suffix so
/// owners may themselves contain dashes.
pub fn decode_record_key(key: &str) -> Result<Identity, MissionError> {
    let malformed = || MissionError::InvalidArgument(format!("malformed record key '{key}'"));

    let (scope, rest) = if let Some(rest) = key.strip_prefix(DAILY_PREFIX) {
        (Scope::Daily, rest)
    } else if let Some(rest) = key.strip_prefix(WEEKLY_PREFIX) {
        (Scope::Weekly, rest)
    } else {
        return Err(malformed());
    };

    if rest.len() <= DATE_SUFFIX_LEN {
        return Err(malformed());
    }
    let split = rest.len() - DATE_SUFFIX_LEN;
    if !rest.is_char_boundary(split) {
        return Err(malformed());
    }
    let (owner, suffix) = rest.split_at(split);
    let Some(raw_date) = suffix.strip_prefix('-') else {
        return Err(malformed());
    };
    let period_start = parse_day_key(raw_date)?;

    if scope == Scope::Weekly && week_start(period_start) != period_start {
        return Err(malformed());
    }

    Ok(Identity {
        owner: owner.to_string(),
        scope,
        period_start,
    })
}

fn is_record_key(key: &str) -> bool {
    key.starts_with(DAILY_PREFIX) || key.starts_with(WEEKLY_PREFIX)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Existing(MissionRecord),
    /// Freshly drawn, not yet saved.
    Drawn(MissionRecord),
}

/// Mission records and completion flags on top of a [`KeyValueStore`].
#[derive(Debug)]
pub struct RecordStore<S> {
    store: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub fn get(&self, identity: &Identity) -> Option<MissionRecord> {
        self.store
            .get(&record_key(identity))
            .map(|mission| MissionRecord {
                identity: identity.clone(),
                mission,
            })
    }

    /// Returns the stored record for `(owner, scope, date)`, or draws a new
    /// mission for it without saving anything.
    pub fn lookup_or_draw<R: Rng + ?Sized>(
        &self,
        owner: &str,
        scope: Scope,
        date: NaiveDate,
        pool: &[String],
        rng: &mut R,
    ) -> Result<Lookup, MissionError> {
        let identity = Identity::new(owner, scope, date);
        if let Some(existing) = self.get(&identity) {
            debug!(key = %record_key(&identity), "reusing existing mission");
            return Ok(Lookup::Existing(existing));
        }

        let mission = pick_n(pool, 1, rng)?
            .pop()
            .ok_or_else(|| MissionError::InvalidArgument("empty mission pool".into()))?;
        Ok(Lookup::Drawn(MissionRecord { identity, mission }))
    }

    pub fn insert(&mut self, record: &MissionRecord) -> Result<(), MissionError> {
        let key = record_key(&record.identity);
        self.store.set(&key, &record.mission)?;
        info!(%key, "assigned new mission");
        Ok(())
    }

    /// Returns the record for `(owner, scope, date)`, drawing and persisting a
    /// new mission only if none exists yet.
    pub fn get_or_create<R: Rng + ?Sized>(
        &mut self,
        owner: &str,
        scope: Scope,
        date: NaiveDate,
        pool: &[String],
        rng: &mut R,
    ) -> Result<MissionRecord, MissionError> {
        match self.lookup_or_draw(owner, scope, date, pool, rng)? {
            Lookup::Existing(record) => Ok(record),
            Lookup::Drawn(record) => {
                self.insert(&record)?;
                Ok(record)
            }
        }
    }

    pub fn set_completed(&mut self, identity: &Identity, value: bool) -> Result<(), MissionError> {
        self.store
            .set(&completion_key(identity), if value { "true" } else { "false" })
    }

    pub fn get_completed(&self, identity: &Identity) -> bool {
        self.store.get(&completion_key(identity)).as_deref() == Some("true")
    }

    /// Scans every key in the store. Undecodable record keys are skipped.
    pub fn list_all_for_owner(&self, owner: &str) -> Vec<MissionRecord> {
        let mut records = Vec::new();
        for key in self.store.keys().into_iter().filter(|k| is_record_key(k)) {
            let identity = match decode_record_key(&key) {
                Ok(identity) => identity,
                Err(err) => {
                    warn!("skipping stored record: {err}");
                    continue;
                }
            };
            if identity.owner != owner {
                continue;
            }
            let Some(mission) = self.store.get(&key) else {
                continue;
            };
            records.push(MissionRecord { identity, mission });
        }
        records
    }
}
