use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use serde::Deserialize;
use tracing::{error, info};

use crate::error::{ConfigError, TextOrigin};

/// Presentation settings for the task list page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub app: AppSection,
    pub format: FormatSection,
    pub messages: MessageSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSection {
    pub title: String,
    pub input_placeholder: String,
}

/// `strftime` patterns used for timestamps shown in the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatSection {
    pub created_at: String,
    pub header_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessageSection {
    pub empty_new_task: String,
    pub empty_edit: String,
    pub confirm_delete: String,
    pub empty_state: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            title: "My Tasks".to_string(),
            input_placeholder: "Add a new task...".to_string(),
        }
    }
}

impl Default for FormatSection {
    fn default() -> Self {
        Self {
            created_at: DEFAULT_CREATED_AT_FORMAT.to_string(),
            header_date: DEFAULT_HEADER_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for MessageSection {
    fn default() -> Self {
        Self {
            empty_new_task: "Please enter a task".to_string(),
            empty_edit: "Task cannot be empty".to_string(),
            confirm_delete: "Are you sure you want to delete this task?".to_string(),
            empty_state: "No tasks yet. Add one above!".to_string(),
        }
    }
}

pub const DEFAULT_CREATED_AT_FORMAT: &str = "%I:%M %p";
pub const DEFAULT_HEADER_DATE_FORMAT: &str = "%A, %B %-d, %Y";

impl UiConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parses `raw`, falling back to the built-in settings when it is invalid.
    pub fn load_or_default(raw: &str) -> Self {
        match Self::from_toml_str(raw) {
            Ok(cfg) => {
                info!(title = %cfg.app.title, "loaded ui config");
                cfg
            }
            Err(err) => {
                error!(error = %err, "failed to load ui config; using defaults");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("format.created_at", &self.format.created_at),
            ("format.header_date", &self.format.header_date),
            ("messages.empty_new_task", &self.messages.empty_new_task),
            ("messages.empty_edit", &self.messages.empty_edit),
            ("messages.confirm_delete", &self.messages.confirm_delete),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
        }

        for (field, pattern) in [
            ("format.created_at", &self.format.created_at),
            ("format.header_date", &self.format.header_date),
        ] {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(ConfigError::InvalidFormat(field));
            }
        }

        Ok(())
    }

    pub fn format_created_at<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        format_with(at, &self.format.created_at, DEFAULT_CREATED_AT_FORMAT)
    }

    pub fn format_header_date<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        format_with(at, &self.format.header_date, DEFAULT_HEADER_DATE_FORMAT)
    }

    /// Alert text for a rejected piece of task text.
    pub fn empty_text_message(&self, origin: TextOrigin) -> &str {
        match origin {
            TextOrigin::NewTask => &self.messages.empty_new_task,
            TextOrigin::Edit => &self.messages.empty_edit,
        }
    }
}

fn format_with<Tz>(at: &DateTime<Tz>, pattern: &str, fallback: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", at.format(pattern)).is_ok() {
        return out;
    }

    out.clear();
    let _ = write!(out, "{}", at.format(fallback));
    out
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;

    fn sample_time() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(5 * 3600)
            .expect("valid offset")
            .with_ymd_and_hms(2025, 3, 5, 9, 5, 0)
            .single()
            .expect("valid time")
    }

    #[test]
    fn defaults_match_en_us_formats() {
        let cfg = UiConfig::default();
        let at = sample_time();
        assert_eq!(cfg.format_created_at(&at), "09:05 AM");
        assert_eq!(cfg.format_header_date(&at), "Wednesday, March 5, 2025");
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let cfg = UiConfig::from_toml_str(
            r#"
[app]
title = "Groceries"

[messages]
confirm_delete = "Really delete?"
"#,
        )
        .expect("parse config");

        assert_eq!(cfg.app.title, "Groceries");
        assert_eq!(cfg.app.input_placeholder, "Add a new task...");
        assert_eq!(cfg.messages.confirm_delete, "Really delete?");
        assert_eq!(cfg.messages.empty_edit, "Task cannot be empty");
        assert_eq!(cfg.format.created_at, DEFAULT_CREATED_AT_FORMAT);
    }

    #[test]
    fn empty_message_is_rejected() {
        let err = UiConfig::from_toml_str("[messages]\nempty_edit = \"  \"\n")
            .expect_err("empty message should fail");
        assert!(matches!(err, ConfigError::EmptyField("messages.empty_edit")));
    }

    #[test]
    fn bad_format_is_rejected() {
        let err = UiConfig::from_toml_str("[format]\ncreated_at = \"%Q\"\n")
            .expect_err("unknown specifier should fail");
        assert!(matches!(err, ConfigError::InvalidFormat("format.created_at")));
    }

    #[test]
    fn malformed_toml_falls_back_to_defaults() {
        let cfg = UiConfig::load_or_default("[app\ntitle = ");
        assert_eq!(cfg, UiConfig::default());
    }

    #[test]
    fn empty_text_message_depends_on_origin() {
        let cfg = UiConfig::default();
        assert_eq!(cfg.empty_text_message(TextOrigin::NewTask), "Please enter a task");
        assert_eq!(cfg.empty_text_message(TextOrigin::Edit), "Task cannot be empty");
    }
}
