use daylist_core::Prompter;

/// Blocking `window.alert` / `window.confirm` dialogs.
#[derive(Clone, Copy, Default)]
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
  fn alert(&self, message: &str) {
    let Some(window) = web_sys::window()
    else {
      tracing::warn!(
        alert_text = message,
        "no window; alert dropped"
      );
      return;
    };

    if let Err(error) =
      window.alert_with_message(message)
    {
      tracing::warn!(
        ?error,
        "alert failed"
      );
    }
  }

  fn confirm(
    &self,
    message: &str
  ) -> bool {
    web_sys::window()
      .and_then(|window| {
        window
          .confirm_with_message(message)
          .ok()
      })
      .unwrap_or(false)
  }
}
