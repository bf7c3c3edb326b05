use daylist_core::{
  Intent,
  TaskId
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub id:         TaskId,
  pub text:       String,
  pub completed:  bool,
  pub created_at: String,
  pub on_intent:  Callback<Intent>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.id;
  let completed = props.completed;
  let emit = |intent: fn(
    TaskId
  ) -> Intent| {
    let on_intent =
      props.on_intent.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_intent.emit(intent(id));
      }
    )
  };

  html! {
      <li class={classes!("task-item", completed.then_some("completed"))}>
          <div
              class={classes!("task-checkbox", completed.then_some("checked"))}
              onclick={emit(Intent::Toggle)}
          >
              { if completed { "✓" } else { "" } }
          </div>
          <div class="task-content">
              <div class={classes!("task-text", completed.then_some("completed"))}>
                  { props.text.clone() }
              </div>
              <div class="task-time">{ props.created_at.clone() }</div>
          </div>
          <div class="task-actions">
              <button class="action-btn edit-btn" onclick={emit(Intent::BeginEdit)}>
                  { "✏️" }
              </button>
              <button class="action-btn delete-btn" onclick={emit(Intent::Delete)}>
                  { "🗑️" }
              </button>
          </div>
      </li>
  }
}
