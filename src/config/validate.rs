// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, RowdagError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::RowdagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.level, raw.output))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_root(cfg)?;
    validate_budget(cfg)?;
    Ok(())
}

fn validate_root(cfg: &RawConfigFile) -> Result<()> {
    if let Some(root) = cfg.level.root.as_deref() {
        if root.trim().is_empty() {
            return Err(RowdagError::ConfigError(
                "[level].root must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_budget(cfg: &RawConfigFile) -> Result<()> {
    if cfg.level.correction_budget == Some(0) {
        return Err(RowdagError::ConfigError(
            "[level].correction_budget must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
