//! Redirect boundary.
//!
//! Navigation replaces the current history entry (`location.replace`), so the
//! user cannot go "back" to the submitted form.

use crate::error::Result;

/// Conventional response field carrying a redirect target.
pub const REDIRECT_URL_FIELD: &str = "redirect_url";

/// Performs full-page navigation.
pub trait Navigator {
	/// Navigates to `url` without creating a history entry.
	fn replace(&self, url: &str) -> Result<()>;
}

/// [`Navigator`] backed by `window.location.replace`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for LocationNavigator {
	fn replace(&self, url: &str) -> Result<()> {
		use crate::error::AjaxFormError;

		let window = web_sys::window().ok_or_else(|| AjaxFormError::Dom("no global window".into()))?;
		window
			.location()
			.replace(url)
			.map_err(|e| AjaxFormError::Navigation {
				url: url.to_string(),
				message: format!("{:?}", e),
			})
	}
}

/// Picks the redirect target for a finished submission.
///
/// A configured target wins; otherwise a non-empty string under
/// [`REDIRECT_URL_FIELD`] in `body` is used.
pub(crate) fn resolve_redirect(
	configured: Option<&crate::options::RedirectTarget>,
	body: Option<&serde_json::Value>,
) -> Option<String> {
	if let Some(url) = configured.and_then(|target| target.resolve()) {
		return Some(url);
	}
	body.and_then(|b| b.get(REDIRECT_URL_FIELD))
		.and_then(serde_json::Value::as_str)
		.filter(|url| !url.is_empty())
		.map(str::to_string)
}
