use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VlfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed file {path}: {source}")]
    Seed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid seed data: {0}")]
    Planner(#[from] verlof_core::PlannerError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
