use daylist_core::affordance::KeyChord;
use daylist_core::{
  Intent,
  TaskId
};
use gloo::timers::callback::Timeout;
use web_sys::{
  HtmlInputElement,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  NodeRef,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_node_ref
};

#[derive(Properties, PartialEq)]
pub struct TaskEditRowProps {
  pub id:        TaskId,
  pub draft:     String,
  pub focused:   bool,
  pub revision:  u64,
  pub on_intent: Callback<Intent>
}

#[function_component(TaskEditRow)]
pub fn task_edit_row(
  props: &TaskEditRowProps
) -> Html {
  let id = props.id;
  let input_ref = use_node_ref();

  {
    let input_ref = input_ref.clone();
    let draft = props.draft.clone();
    use_effect_with(
      (id, props.focused, props.revision),
      move |(id, focused, _revision)| {
        // the input only exists once this render is committed
        let pending = focused.then(|| {
          let id = *id;
          Timeout::new(0, move || {
            reset_edit_input(
              &input_ref, id, &draft
            );
          })
        });
        move || drop(pending)
      }
    );
  }

  let save = {
    let input_ref = input_ref.clone();
    let on_intent =
      props.on_intent.clone();
    move || {
      let text = input_ref
        .cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default();
      on_intent.emit(Intent::SaveEdit(
        id, text
      ));
    }
  };

  let on_keydown = {
    let save = save.clone();
    let on_intent =
      props.on_intent.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        let chord = KeyChord::new(
          e.key(),
          e.shift_key()
        );
        if chord.saves_edit() {
          e.prevent_default();
          save();
        } else if chord.cancels_edit()
        {
          on_intent
            .emit(Intent::CancelEdit);
        }
      }
    )
  };

  let on_save_click =
    Callback::from(
      move |_: MouseEvent| save()
    );

  let on_cancel_click = {
    let on_intent =
      props.on_intent.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_intent
          .emit(Intent::CancelEdit);
      }
    )
  };

  html! {
      <li class="task-item editing">
          <div class="task-content">
              <input
                  ref={input_ref}
                  type="text"
                  class="task-edit-input"
                  value={props.draft.clone()}
                  onkeydown={on_keydown}
              />
          </div>
          <div class="task-actions">
              <button class="action-btn save-btn" onclick={on_save_click}>{ "✓" }</button>
              <button class="action-btn cancel-btn" onclick={on_cancel_click}>{ "✕" }</button>
          </div>
      </li>
  }
}

/// Puts the stored text back, then focuses and selects it, like a fresh
/// edit field after a full re-render.
fn reset_edit_input(
  input_ref: &NodeRef,
  id: TaskId,
  draft: &str
) {
  let Some(input) =
    input_ref.cast::<HtmlInputElement>()
  else {
    tracing::debug!(
      task_id = %id,
      "edit input gone before focus"
    );
    return;
  };

  input.set_value(draft);
  if let Err(error) = input.focus() {
    tracing::warn!(
      task_id = %id,
      ?error,
      "failed to focus edit input"
    );
  }
  input.select();
}
