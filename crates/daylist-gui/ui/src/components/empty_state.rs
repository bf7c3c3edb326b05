use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
  pub message: String
}

#[function_component(EmptyState)]
pub fn empty_state(
  props: &EmptyStateProps
) -> Html {
  html! {
      <div class="empty-state">
          <div class="empty-icon">{ "📝" }</div>
          <p>{ props.message.clone() }</p>
      </div>
  }
}
