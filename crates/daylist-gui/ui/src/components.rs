mod add_bar;
mod date_header;
mod empty_state;
mod stats_line;
mod task_edit_row;
mod task_list;
mod task_list_row;

pub use add_bar::AddBar;
pub use date_header::DateHeader;
pub use empty_state::EmptyState;
pub use stats_line::StatsLine;
pub use task_edit_row::TaskEditRow;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
