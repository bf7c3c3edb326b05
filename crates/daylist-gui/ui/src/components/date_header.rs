use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct DateHeaderProps {
  pub title: String,
  pub date:  String
}

#[function_component(DateHeader)]
pub fn date_header(
  props: &DateHeaderProps
) -> Html {
  html! {
      <div class="header">
          <h1>{ props.title.clone() }</h1>
          <div class="date">{ props.date.clone() }</div>
      </div>
  }
}
