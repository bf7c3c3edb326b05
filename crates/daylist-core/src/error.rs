use std::fmt;

/// Where a rejected piece of task text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrigin {
    NewTask,
    Edit,
}

impl fmt::Display for TextOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewTask => f.write_str("new task"),
            Self::Edit => f.write_str("edited task"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// Text was empty or whitespace-only after trimming.
    #[error("{0} text is empty")]
    EmptyTaskText(TextOrigin),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse ui config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("ui config field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("ui config field `{0}` is not a valid strftime pattern")]
    InvalidFormat(&'static str),
}
