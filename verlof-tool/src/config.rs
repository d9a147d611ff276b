//! Seed resolution: CLI flag, environment, config file, built-in data.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use verlof_core::{HolidayCalendar, Planner, TeamMember, Vacation};

use crate::error::VlfError;

const SEED_ENV: &str = "VLF_SEED";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Path to a seed file used instead of the built-in demo data.
    pub seed: Option<PathBuf>,
}

/// Roster and requests as stored in a seed file.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub vacations: Vec<Vacation>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("verlof").join("config.toml"))
}

/// A missing or unreadable config file is just the default config.
pub fn load_config() -> Config {
    match config_path() {
        Some(path) => read_config(&path),
        None => Config::default(),
    }
}

fn read_config(path: &Path) -> Config {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Config::default();
    };

    toml::from_str(&content).unwrap_or_default()
}

/// Seed path priority: the CLI flag, then `VLF_SEED`, then the config
/// file. `None` means the built-in demo data.
pub fn resolve_seed_path(cli: Option<PathBuf>) -> Option<PathBuf> {
    let env = std::env::var(SEED_ENV)
        .ok()
        .filter(|path| !path.is_empty())
        .map(PathBuf::from);
    pick_seed(cli, env, load_config().seed)
}

/// The ladder itself, separate from where each layer is read from.
fn pick_seed(
    cli: Option<PathBuf>,
    env: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Option<PathBuf> {
    cli.or(env).or(config)
}

/// Planner for the resolved seed: the named file, or demo data without one.
pub fn load_planner(seed: Option<&Path>) -> Result<Planner, VlfError> {
    let Some(path) = seed else {
        return Ok(Planner::demo());
    };

    let content = std::fs::read_to_string(path)?;
    let file: SeedFile = serde_json::from_str(&content).map_err(|source| VlfError::Seed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        members = file.members.len(),
        vacations = file.vacations.len(),
        "seed file loaded"
    );

    let planner = Planner::new(
        file.members,
        file.vacations,
        HolidayCalendar::dutch_2025(),
    )?;
    Ok(planner)
}
