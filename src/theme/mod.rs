use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigDirs, ConfigPathError};
use crate::radius::{
    validate_radius_value, CategoryTable, Radius, RadiusError, RadiusResult, RadiusValue, Scalar,
    Term,
};

const RADIUS_CONFIG_FILE: &str = "radius.json";

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read radius config: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse radius config")]
    ParseConfig(#[from] serde_json::Error),
    #[error("invalid radius category `{name}`")]
    InvalidCategory { name: String, source: RadiusError },
}

/// A category value as written in `radius.json`: a bare pixel count or a
/// 1–4 value shorthand string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategorySetting {
    Pixels(f64),
    Shorthand(String),
}

impl CategorySetting {
    /// Category values are literals only; one category cannot reference another.
    fn to_radius(&self) -> RadiusResult<Radius> {
        match self {
            Self::Pixels(px) => Ok(Radius::single(Scalar::px(*px))),
            Self::Shorthand(text) => {
                let value: RadiusValue = text.parse()?;
                let scalars = value
                    .terms()
                    .iter()
                    .map(validate_radius_value)
                    .collect::<RadiusResult<Vec<_>>>()?;
                Radius::new(scalars)
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RadiusConfig {
    #[serde(default)]
    pub categories: BTreeMap<String, CategorySetting>,
}

impl RadiusConfig {
    /// Default categories with this config's entries layered on top.
    pub fn category_table(&self) -> ConfigResult<CategoryTable> {
        self.categories
            .iter()
            .try_fold(CategoryTable::default(), |table, (name, setting)| {
                let invalid = |source| ConfigError::InvalidCategory {
                    name: name.clone(),
                    source,
                };
                if !is_category_name(name) {
                    return Err(invalid(RadiusError::invalid_radius(name.as_str())));
                }
                let radius = setting.to_radius().map_err(invalid)?;
                tracing::debug!(category = %name, %radius, "configured radius category");
                table.with_category(name.as_str(), radius).map_err(invalid)
            })
    }
}

pub fn load_radius_config() -> ConfigResult<RadiusConfig> {
    load_radius_config_with(&ConfigDirs::from_env())
}

fn load_radius_config_with(dirs: &ConfigDirs) -> ConfigResult<RadiusConfig> {
    let path = radius_config_path_with(dirs)?;
    if !path.exists() {
        return Ok(RadiusConfig::default());
    }

    let serialized = fs::read_to_string(&path).map_err(|source| ConfigError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let config = serde_json::from_str(&serialized)?;
    tracing::debug!(?path, "loaded radius config");
    Ok(config)
}

/// Builds the category table from the user's config, falling back to the
/// defaults when the file cannot be used.
pub(crate) fn load_category_table() -> CategoryTable {
    load_category_table_with(&ConfigDirs::from_env())
}

fn load_category_table_with(dirs: &ConfigDirs) -> CategoryTable {
    match load_radius_config_with(dirs).and_then(|config| config.category_table()) {
        Ok(table) => table,
        Err(err) => {
            tracing::warn!(?err, "failed to load radius config; using default categories");
            CategoryTable::default()
        }
    }
}

fn radius_config_path_with(dirs: &ConfigDirs) -> ConfigResult<PathBuf> {
    dirs.file_path(RADIUS_CONFIG_FILE)
        .map_err(|error| match error {
            ConfigPathError::MissingHomeDirectory => ConfigError::MissingHomeDirectory,
        })
}

fn is_category_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(|ch: char| ch.is_ascii_whitespace() || ch == '(' || ch == ')')
        && matches!(Term::parse(name), Term::Keyword(_))
}
