use daylist_core::affordance::{
  KeyChord,
  add_control_active
};
use web_sys::{
  HtmlInputElement,
  InputEvent,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct AddBarProps {
  pub value:       String,
  pub placeholder: String,
  pub on_input:    Callback<String>,
  pub on_submit:   Callback<()>
}

#[function_component(AddBar)]
pub fn add_bar(
  props: &AddBarProps
) -> Html {
  let active =
    add_control_active(&props.value);

  let on_input = {
    let on_input =
      props.on_input.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_input.emit(input.value());
      }
    )
  };

  let on_keydown = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        let chord = KeyChord::new(
          e.key(),
          e.shift_key()
        );
        if chord.submits_new_task() {
          e.prevent_default();
          on_submit.emit(());
        }
      }
    )
  };

  let on_click = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_submit.emit(());
      }
    )
  };

  html! {
      <div class="input-section">
          <input
              type="text"
              class="task-input"
              placeholder={props.placeholder.clone()}
              value={props.value.clone()}
              oninput={on_input}
              onkeydown={on_keydown}
          />
          <button
              class={classes!("add-btn", active.then_some("active"))}
              onclick={on_click}
          >
              { "+" }
          </button>
      </div>
  }
}
