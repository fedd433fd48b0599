use std::{env, path::PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: PathBuf,
    pub catalogue_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);
        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/missions.json"));
        let catalogue_path = lookup("MISSION_CATALOGUE_PATH").map(PathBuf::from);
        let seed = lookup("MISSION_SEED").and_then(|value| match value.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(err) => {
                warn!("ignoring MISSION_SEED={value}: {err}");
                None
            }
        });

        Self {
            port,
            data_path,
            catalogue_path,
            seed,
        }
    }
}
