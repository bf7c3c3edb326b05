use chrono::Local;
use daylist_core::{
  Intent,
  Outcome,
  TaskBoard,
  TaskListView,
  UiConfig,
  dispatch
};
use gloo::console::log;
use yew::{
  Callback,
  Html,
  UseStateHandle,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::components::{
  AddBar,
  DateHeader,
  EmptyState,
  StatsLine,
  TaskList
};
use crate::prompts::BrowserPrompter;

const UI_CONFIG_TOML: &str =
  include_str!("../assets/daylist.toml");

#[function_component(App)]
pub fn app() -> Html {
  let config = use_state(|| {
    UiConfig::load_or_default(
      UI_CONFIG_TOML
    )
  });
  let header_date = {
    let config = config.clone();
    use_state(move || {
      config.format_header_date(
        &Local::now()
      )
    })
  };
  let board =
    use_state(TaskBoard::new);
  let draft = use_state(String::new);

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  let on_intent = {
    let board = board.clone();
    let config = config.clone();
    Callback::from(
      move |intent: Intent| {
        apply_intent(
          &board, &config, intent
        );
      }
    )
  };

  let on_draft_input = {
    let draft = draft.clone();
    Callback::from(
      move |value: String| {
        draft.set(value);
      }
    )
  };

  let on_submit = {
    let board = board.clone();
    let config = config.clone();
    let draft = draft.clone();
    Callback::from(move |_: ()| {
      let outcome = apply_intent(
        &board,
        &config,
        Intent::Add((*draft).clone())
      );
      if let Some(next) =
        draft_after_submit(&outcome)
      {
        draft.set(next);
      }
    })
  };

  let view =
    TaskListView::build(&board);

  html! {
      <div class="container">
          <DateHeader
              title={config.app.title.clone()}
              date={(*header_date).clone()}
          />
          <AddBar
              value={(*draft).clone()}
              placeholder={config.app.input_placeholder.clone()}
              on_input={on_draft_input}
              on_submit={on_submit}
          />
          {
              if view.show_empty_state {
                  html! { <EmptyState message={config.messages.empty_state.clone()} /> }
              } else {
                  html! {
                      <TaskList
                          rows={view.rows.clone()}
                          focus={view.focus}
                          revision={view.revision}
                          on_intent={on_intent}
                      />
                  }
              }
          }
          <StatsLine text={view.stats.clone()} />
      </div>
  }
}

/// Runs `intent` against a copy of the board and publishes the copy when
/// it changed, which re-renders the whole list.
fn apply_intent(
  board: &UseStateHandle<TaskBoard>,
  config: &UiConfig,
  intent: Intent
) -> Outcome {
  let mut next = (**board).clone();
  let outcome = dispatch(
    &mut next,
    intent,
    &BrowserPrompter,
    config,
    &Local::now()
  );

  if outcome.changed() {
    tracing::debug!(
      tasks = next.len(),
      editing = ?next.editing(),
      "board changed"
    );
    board.set(next);
  } else {
    ui_debug(
      "intent.no_change",
      &format!("{outcome:?}")
    );
  }
  outcome
}

/// The add field empties only when the task actually went in; a rejected
/// submit keeps whatever was typed.
fn draft_after_submit(
  outcome: &Outcome
) -> Option<String> {
  outcome
    .changed()
    .then(String::new)
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
