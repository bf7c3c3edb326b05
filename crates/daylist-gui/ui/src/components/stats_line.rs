use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatsLineProps {
  pub text: String
}

#[function_component(StatsLine)]
pub fn stats_line(
  props: &StatsLineProps
) -> Html {
  html! {
      <div class="task-stats">{ props.text.clone() }</div>
  }
}
