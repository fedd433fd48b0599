use crate::errors::MissionError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

const DAILY_MISSIONS: &[&str] = &[
    "Write down three things you like about yourself",
    "Take a ten minute walk without your phone",
    "Drink a full glass of water as soon as you wake up",
    "Say one kind sentence to yourself in the mirror",
    "Go to bed thirty minutes earlier than usual",
    "Cook yourself a proper meal",
    "Spend fifteen minutes on a hobby you enjoy",
    "Stretch for five minutes before lunch",
    "Write one line about how you feel today",
    "Turn off notifications for an hour",
    "Tidy one small corner of your room",
    "Listen to a song that makes you happy",
];

const WEEKLY_MISSIONS: &[&str] = &[
    "Read one chapter of a book",
    "Call a friend you have not talked to in a while",
    "Try a recipe you have never made",
    "Visit a place in your city you have never been to",
    "Declutter one drawer or shelf",
    "Exercise three times this week",
    "Write a letter to your future self",
    "Learn ten words of a new language",
    "Watch a documentary on a topic you know nothing about",
    "Plan a small outing for the weekend",
];

/// The two mission pools. Both are non-empty and hold distinct entries.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalogue {
    #[serde(rename = "selfLoveMissions")]
    pub daily: Vec<String>,
    #[serde(rename = "generalMissions")]
    pub weekly: Vec<String>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self {
            daily: DAILY_MISSIONS.iter().map(|m| m.to_string()).collect(),
            weekly: WEEKLY_MISSIONS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl Catalogue {
    pub fn new(daily: Vec<String>, weekly: Vec<String>) -> Result<Self, MissionError> {
        let catalogue = Self { daily, weekly };
        catalogue.validate()?;
        Ok(catalogue)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, MissionError> {
        let raw: Self = serde_json::from_slice(bytes)
            .map_err(|err| MissionError::InvalidCatalogue(err.to_string()))?;
        Self::new(raw.daily, raw.weekly)
    }

    fn validate(&self) -> Result<(), MissionError> {
        for (name, pool) in [("daily", &self.daily), ("weekly", &self.weekly)] {
            if pool.is_empty() {
                return Err(MissionError::InvalidCatalogue(format!("{name} pool is empty")));
            }
            let mut seen = HashSet::new();
            if let Some(dup) = pool.iter().find(|m| !seen.insert(m.as_str())) {
                return Err(MissionError::InvalidCatalogue(format!(
                    "{name} pool repeats '{dup}'"
                )));
            }
        }
        Ok(())
    }
}

/// Loads a catalogue file, falling back to the built-in pools when the path is
/// absent, unreadable or invalid.
pub async fn load_catalogue(path: Option<&Path>) -> Catalogue {
    let Some(path) = path else {
        return Catalogue::default();
    };

    match fs::read(path).await {
        Ok(bytes) => match Catalogue::from_json(&bytes) {
            Ok(catalogue) => {
                info!(
                    daily = catalogue.daily.len(),
                    weekly = catalogue.weekly.len(),
                    "loaded mission catalogue from {}",
                    path.display()
                );
                catalogue
            }
            Err(err) => {
                error!("failed to parse catalogue file: {err}");
                Catalogue::default()
            }
        },
        Err(err) => {
            error!("failed to read catalogue file: {err}");
            Catalogue::default()
        }
    }
}

pub fn pick_one<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> Result<String, MissionError> {
    pool.choose(rng)
        .cloned()
        .ok_or_else(|| MissionError::InvalidArgument("cannot pick from an empty pool".into()))
}

/// Draws `n` distinct missions in random order.
pub fn pick_n<R: Rng + ?Sized>(
    pool: &[String],
    n: usize,
    rng: &mut R,
) -> Result<Vec<String>, MissionError> {
    if n > pool.len() {
        return Err(MissionError::InvalidArgument(format!(
            "requested {n} missions from a pool of {}",
            pool.len()
        )));
    }
    let mut picked: Vec<String> = pool.choose_multiple(rng, n).cloned().collect();
    picked.shuffle(rng);
    Ok(picked)
}
