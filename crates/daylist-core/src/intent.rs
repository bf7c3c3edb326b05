use chrono::{DateTime, TimeZone};
use tracing::{debug, info};

use crate::board::TaskBoard;
use crate::config::UiConfig;
use crate::error::TaskError;
use crate::task::TaskId;

/// A user action on the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    Delete(TaskId),
    Toggle(TaskId),
    BeginEdit(TaskId),
    SaveEdit(TaskId, String),
    CancelEdit,
}

impl Intent {
    fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Delete(_) => "delete",
            Self::Toggle(_) => "toggle",
            Self::BeginEdit(_) => "begin_edit",
            Self::SaveEdit(..) => "save_edit",
            Self::CancelEdit => "cancel_edit",
        }
    }
}

/// Blocking prompts shown to the user.
pub trait Prompter {
    fn alert(&self, message: &str);

    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
    /// The user declined a confirmation.
    Declined,
    /// Validation failed; the user has already been alerted.
    Rejected(TaskError),
}

impl Outcome {
    fn from_changed(changed: bool) -> Self {
        if changed { Self::Changed } else { Self::Unchanged }
    }

    pub fn changed(&self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Applies `intent` to `board`, asking `prompter` where the action needs it.
#[tracing::instrument(skip_all, fields(intent = intent.name()))]
pub fn dispatch<P, Tz>(
    board: &mut TaskBoard,
    intent: Intent,
    prompter: &P,
    cfg: &UiConfig,
    now: &DateTime<Tz>,
) -> Outcome
where
    P: Prompter + ?Sized,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let outcome = match intent {
        Intent::Add(text) => {
            let created_at = cfg.format_created_at(now);
            match board.add(&text, now.timestamp_millis(), created_at) {
                Ok(_) => Outcome::Changed,
                Err(err) => reject(prompter, cfg, err),
            }
        }
        Intent::Delete(id) => {
            if !board.contains(id) {
                Outcome::Unchanged
            } else if prompter.confirm(&cfg.messages.confirm_delete) {
                Outcome::from_changed(board.delete(id))
            } else {
                info!(task_id = %id, "delete declined");
                Outcome::Declined
            }
        }
        Intent::Toggle(id) => Outcome::from_changed(board.toggle_completed(id)),
        Intent::BeginEdit(id) => Outcome::from_changed(board.begin_edit(id)),
        Intent::SaveEdit(id, text) => match board.save_edit(id, &text) {
            Ok(_) => Outcome::Changed,
            Err(err) => reject(prompter, cfg, err),
        },
        Intent::CancelEdit => Outcome::from_changed(board.cancel_edit()),
    };

    debug!(?outcome, "dispatched intent");
    outcome
}

fn reject<P>(prompter: &P, cfg: &UiConfig, err: TaskError) -> Outcome
where
    P: Prompter + ?Sized,
{
    let TaskError::EmptyTaskText(origin) = &err;
    prompter.alert(cfg.empty_text_message(*origin));
    Outcome::Rejected(err)
}
