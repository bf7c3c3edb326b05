use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a task, derived from its creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Id for a task created at `now_millis`, kept strictly above `last`
    /// so two tasks created in the same millisecond still differ.
    pub fn next_after(last: Option<TaskId>, now_millis: i64) -> Self {
        let stamp = u64::try_from(now_millis).unwrap_or(0);
        match last {
            Some(TaskId(prev)) if stamp <= prev => Self(prev.saturating_add(1)),
            _ => Self(stamp),
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

impl Task {
    pub fn new(id: TaskId, text: String, created_at: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }
}
