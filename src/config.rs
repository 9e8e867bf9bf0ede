//! Registration options for the custom element
//!
//! Passed from JS as a plain object to `define_with`, e.g.
//! `define_with({ tagName: "copy-button", emitEvents: false })`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CopyError, Result};

pub const DEFAULT_TAG_NAME: &str = "clipboard-copy";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementConfig {
    #[serde(default = "default_tag_name")]
    pub tag_name: String,
    /// Dispatch `clipboard-copy` / `clipboard-copy-error` after each write.
    ///
    /// When off, a rejected Clipboard API write is left unhandled and shows
    /// up on the page's `unhandledrejection` channel instead. A rejected
    /// selection copy (`execCommand`) has no such channel and is only logged.
    #[serde(default = "default_true")]
    pub emit_events: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String, // "error", "warn", "info", "debug" or "trace"
}

fn default_tag_name() -> String {
    DEFAULT_TAG_NAME.to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            tag_name: default_tag_name(),
            emit_events: true,
            log_level: default_log_level(),
        }
    }
}

impl ElementConfig {
    /// Check the tag against the custom element name rules the browser enforces
    pub fn validate(&self) -> Result<()> {
        let name = self.tag_name.as_str();
        let starts_lower = name.chars().next().is_some_and(|c| c.is_ascii_lowercase());
        if !starts_lower {
            return Err(CopyError::Config(format!(
                "tag name '{}' must start with a lowercase ASCII letter",
                name
            )));
        }
        if !name.contains('-') {
            return Err(CopyError::Config(format!("tag name '{}' must contain a hyphen", name)));
        }
        if name.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace()) {
            return Err(CopyError::Config(format!(
                "tag name '{}' must not contain uppercase letters or whitespace",
                name
            )));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<log::Level> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| CopyError::Config(format!("unknown log level '{}'", self.log_level)))
    }
}

/// Options of every registered tag, keyed by tag name
#[derive(Debug, Default)]
pub struct TagConfigs {
    by_tag: HashMap<String, ElementConfig>,
}

impl TagConfigs {
    /// Remember the options a tag was defined with. A tag can only be
    /// defined once, so an existing entry is kept and `false` returned.
    pub fn record(&mut self, config: ElementConfig) -> bool {
        if self.by_tag.contains_key(&config.tag_name) {
            return false;
        }
        self.by_tag.insert(config.tag_name.clone(), config);
        true
    }

    pub fn get(&self, tag_name: &str) -> Option<&ElementConfig> {
        self.by_tag.get(tag_name)
    }

    /// Unknown tags get the default (events on)
    pub fn emit_events(&self, tag_name: &str) -> bool {
        self.get(tag_name).map_or(true, |c| c.emit_events)
    }
}
