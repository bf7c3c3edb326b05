use daylist_core::{
  Intent,
  TaskId,
  TaskRow
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::{
  TaskEditRow,
  TaskListRow
};

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub rows:      Vec<TaskRow>,
  pub focus:     Option<TaskId>,
  pub revision:  u64,
  pub on_intent: Callback<Intent>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <ul class="task-list">
          {
              for props.rows.iter().cloned().map(|row| match row {
                  | TaskRow::Display { id, text, completed, created_at } => html! {
                      <TaskListRow
                          key={id.to_string()}
                          id={id}
                          text={text}
                          completed={completed}
                          created_at={created_at}
                          on_intent={props.on_intent.clone()}
                      />
                  },
                  | TaskRow::Editing { id, draft } => html! {
                      <TaskEditRow
                          key={id.to_string()}
                          id={id}
                          draft={draft}
                          focused={props.focus == Some(id)}
                          revision={props.revision}
                          on_intent={props.on_intent.clone()}
                      />
                  }
              })
          }
      </ul>
  }
}
