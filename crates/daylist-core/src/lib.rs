//! In-memory task list state for the Daylist page.
//!
//! Everything here is platform independent: the browser front end holds a
//! [`board::TaskBoard`], turns DOM events into [`intent::Intent`]s and renders
//! [`view::TaskListView`].

pub mod affordance;
pub mod board;
pub mod config;
pub mod error;
pub mod intent;
pub mod stats;
pub mod task;
pub mod view;

pub use board::TaskBoard;
pub use config::UiConfig;
pub use error::{ConfigError, TaskError, TextOrigin};
pub use intent::{Intent, Outcome, Prompter, dispatch};
pub use task::{Task, TaskId};
pub use view::{TaskListView, TaskRow};
