//! Error types for the skills subsystem.

use std::path::PathBuf;

/// Skill-specific errors.
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("skill not found: `{0}`")]
    NotFound(String),

    #[error("duplicate skill {field} `{value}`")]
    DuplicateSkill { field: &'static str, value: String },

    #[error("invalid skill descriptor `{name}`: {reason}")]
    InvalidDescriptor { name: String, reason: String },

    #[error("invalid configuration in `{path}`: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SkillError>;
