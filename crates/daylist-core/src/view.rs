use crate::board::TaskBoard;
use crate::stats::stats_line;
use crate::task::TaskId;

/// One rendered entry of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskRow {
    Display {
        id: TaskId,
        text: String,
        completed: bool,
        created_at: String,
    },
    Editing {
        id: TaskId,
        draft: String,
    },
}

impl TaskRow {
    pub fn id(&self) -> TaskId {
        match self {
            Self::Display { id, .. } | Self::Editing { id, .. } => *id,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }
}

/// Everything the page shows for a given board, rebuilt from scratch on
/// every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    pub rows: Vec<TaskRow>,
    pub show_empty_state: bool,
    pub stats: String,
    /// Edit field to focus and select once the rows are in the page.
    pub focus: Option<TaskId>,
    /// Board revision this view was built from; rows that keep their own
    /// DOM state reset when it moves.
    pub revision: u64,
}

impl TaskListView {
    pub fn build(board: &TaskBoard) -> Self {
        let rows = board
            .tasks()
            .iter()
            .map(|task| {
                if board.is_editing(task.id) {
                    TaskRow::Editing {
                        id: task.id,
                        draft: task.text.clone(),
                    }
                } else {
                    TaskRow::Display {
                        id: task.id,
                        text: task.text.clone(),
                        completed: task.completed,
                        created_at: task.created_at.clone(),
                    }
                }
            })
            .collect::<Vec<_>>();

        let focus = rows.iter().find(|row| row.is_editing()).map(TaskRow::id);

        Self {
            show_empty_state: rows.is_empty(),
            stats: stats_line(board.tasks()),
            rows,
            focus,
            revision: board.revision(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_shows_placeholder_only() {
        let view = TaskListView::build(&TaskBoard::new());
        assert!(view.show_empty_state);
        assert!(view.rows.is_empty());
        assert_eq!(view.stats, "");
        assert_eq!(view.focus, None);
    }

    #[test]
    fn editing_task_renders_as_edit_row() {
        let mut board = TaskBoard::new();
        let first = board.add("first", 10, "10:00 AM").expect("add");
        let second = board.add("second", 11, "10:00 AM").expect("add");
        board.toggle_completed(first);
        board.begin_edit(second);

        let view = TaskListView::build(&board);
        assert!(!view.show_empty_state);
        assert_eq!(
            view.rows,
            vec![
                TaskRow::Display {
                    id: first,
                    text: "first".to_string(),
                    completed: true,
                    created_at: "10:00 AM".to_string(),
                },
                TaskRow::Editing {
                    id: second,
                    draft: "second".to_string(),
                },
            ]
        );
        assert_eq!(view.focus, Some(second));
        assert_eq!(view.stats, "1 of 2 tasks completed");
    }

    #[test]
    fn build_is_repeatable() {
        let mut board = TaskBoard::new();
        let id = board.add("a", 1, "").expect("add");
        board.begin_edit(id);
        assert_eq!(TaskListView::build(&board), TaskListView::build(&board));
    }

    #[test]
    fn unrelated_change_moves_the_revision_of_the_edit_view() {
        let mut board = TaskBoard::new();
        let editing = board.add("edit me", 1, "").expect("add");
        let other = board.add("other", 2, "").expect("add");
        board.begin_edit(editing);
        let before = TaskListView::build(&board);

        board.toggle_completed(other);
        let after = TaskListView::build(&board);

        assert_eq!(after.focus, Some(editing));
        assert_eq!(after.rows[0], before.rows[0]);
        assert_ne!(after.revision, before.revision);
    }

    #[test]
    fn markup_in_text_is_kept_as_data() {
        let mut board = TaskBoard::new();
        board
            .add("<img src=x onerror=alert(1)>", 1, "")
            .expect("add");
        let view = TaskListView::build(&board);
        match &view.rows[0] {
            TaskRow::Display { text, .. } => {
                assert_eq!(text, "<img src=x onerror=alert(1)>");
            }
            row => panic!("unexpected row {row:?}"),
        }
    }
}
