//! Loading, merging and saving the review configuration

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::review::AmagConfig;
use crate::layout::ProjectLayout;
use crate::{Error, Result};

const ROLES: [&str; 2] = ["consultant", "critic"];

/// Largest integer an f64 represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Reads and writes `.amag/config.json` for one project.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_project(layout: &ProjectLayout) -> Self {
        Self::new(layout.config_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the config, overlaying stored values on defaults.
    ///
    /// Never fails: a missing file yields defaults, and an unreadable file or
    /// one that is not valid JSON is logged as a warning and also yields
    /// defaults. Stored values that do not fit a field are kept as
    /// [`Setting::Raw`](super::Setting::Raw).
    pub fn read(&self) -> AmagConfig {
        if !self.path.exists() {
            return AmagConfig::default();
        }

        match self.load_merged() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Invalid .amag/config.json, using defaults"
                );
                AmagConfig::default()
            }
        }
    }

    fn load_merged(&self) -> Result<AmagConfig> {
        let raw = amag_fs::io::read_text(&self.path)?;
        let stored: Value = serde_json::from_str(&raw)?;
        Ok(merge_with_defaults(&stored)?)
    }

    /// Write the whole config as pretty-printed JSON, replacing any existing file.
    pub fn write(&self, config: &AmagConfig) -> Result<()> {
        let mut content = serde_json::to_string_pretty(config)?;
        content.push('\n');
        amag_fs::io::write_text(&self.path, &content)?;
        tracing::debug!(path = %self.path.display(), "wrote config");
        Ok(())
    }

    /// Overwrite the file with defaults and return them.
    pub fn reset(&self) -> Result<AmagConfig> {
        let config = AmagConfig::default();
        self.write(&config)?;
        Ok(config)
    }

    /// Set one value addressed by a dot path such as `review.consultant.cli`.
    ///
    /// Every segment must already exist in the config shape. The value is
    /// coerced with [`coerce_value`] and stored as-is, whatever the field's
    /// usual type. Replacing a whole section (`review.consultant`) with a
    /// scalar is rejected and the file is left untouched.
    pub fn set_value(&self, dot_path: &str, value: &str) -> Result<AmagConfig> {
        let mut document = serde_json::to_value(self.read())?;
        let invalid_path = || Error::InvalidConfigPath {
            path: dot_path.to_string(),
        };

        let mut node = &mut document;
        let mut segments = dot_path.split('.').peekable();
        while let Some(segment) = segments.next() {
            let object = node.as_object_mut().ok_or_else(invalid_path)?;
            let child = object.get_mut(segment).ok_or_else(invalid_path)?;
            if segments.peek().is_none() {
                *child = coerce_value(value);
                break;
            }
            node = child;
        }

        let updated: AmagConfig =
            serde_json::from_value(document).map_err(|e| Error::InvalidConfigValue {
                path: dot_path.to_string(),
                message: e.to_string(),
            })?;

        self.write(&updated)?;
        Ok(updated)
    }
}

/// Overlay a stored document on the default config.
///
/// Role objects merge key by key, so a stored `null` replaces the default.
/// `timeout_ms` falls back to the default only when absent or null. Other
/// keys are ignored.
fn merge_with_defaults(stored: &Value) -> serde_json::Result<AmagConfig> {
    let mut merged = serde_json::to_value(AmagConfig::default())?;
    let stored_review = stored.get("review");

    if let Some(review) = merged.get_mut("review").and_then(Value::as_object_mut) {
        for role in ROLES {
            let overrides = stored_review
                .and_then(|r| r.get(role))
                .and_then(Value::as_object);
            if let (Some(overrides), Some(target)) =
                (overrides, review.get_mut(role).and_then(Value::as_object_mut))
            {
                overlay(target, overrides);
            }
        }

        match stored_review.and_then(|r| r.get("timeout_ms")) {
            None | Some(Value::Null) => {}
            Some(timeout) => {
                review.insert("timeout_ms".to_string(), timeout.clone());
            }
        }
    }

    serde_json::from_value(merged)
}

fn overlay(target: &mut Map<String, Value>, overrides: &Map<String, Value>) {
    for (key, value) in overrides {
        target.insert(key.clone(), value.clone());
    }
}

/// Coerce a command-line string into a JSON value.
///
/// Anything that parses as a finite number becomes a number (integral values
/// are stored as integers), the literal `null` becomes `null`, and everything
/// else stays a string. This applies regardless of the target field's type.
pub fn coerce_value(raw: &str) -> Value {
    if let Some(number) = parse_finite_number(raw) {
        return number;
    }
    if raw == "null" {
        Value::Null
    } else {
        Value::String(raw.to_string())
    }
}

fn parse_finite_number(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(Value::from(int));
    }
    if let Ok(uint) = trimmed.parse::<u64>() {
        return Some(Value::from(uint));
    }

    let float: f64 = trimmed.parse().ok()?;
    if !float.is_finite() {
        return None;
    }
    if float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER {
        return Some(Value::from(float as i64));
    }
    serde_json::Number::from_f64(float).map(Value::Number)
}
