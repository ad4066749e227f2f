// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{LayerdagError, Result};

/// Characters with a meaning in the `.dot` / `.ord` grammars.
const RESERVED_CHARS: [char; 4] = ['#', '{', '}', ';'];

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::LayerdagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.output, raw.dummy, raw.reader))
    }
}

pub fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_output(cfg)?;
    validate_dummy_prefix(cfg)?;
    Ok(())
}

fn validate_output(cfg: &RawConfigFile) -> Result<()> {
    if cfg.output.nodes_per_line == 0 {
        return Err(LayerdagError::ConfigError(
            "[output].nodes_per_line must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_dummy_prefix(cfg: &RawConfigFile) -> Result<()> {
    let prefix = &cfg.dummy.prefix;
    if prefix.is_empty() {
        return Err(LayerdagError::ConfigError(
            "[dummy].prefix must not be empty".to_string(),
        ));
    }
    if prefix.chars().any(char::is_whitespace) {
        return Err(LayerdagError::ConfigError(format!(
            "[dummy].prefix '{}' must not contain whitespace",
            prefix
        )));
    }
    if let Some(c) = prefix.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Err(LayerdagError::ConfigError(format!(
            "[dummy].prefix '{}' contains reserved character '{}'",
            prefix, c
        )));
    }
    Ok(())
}
