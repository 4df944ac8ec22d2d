//! Submitter configuration.
//!
//! [`AjaxFormOptions`] is immutable once built. Runtime changes go through
//! [`OptionsPatch`], which produces a new options value; a
//! [`FormSubmitter`](crate::FormSubmitter) swaps that in for later
//! submissions while in-flight ones keep the snapshot they started with.
//!
//! ## Example
//!
//! ```ignore
//! use ajax_form::{AjaxFormOptions, RedirectTarget};
//!
//! let options = AjaxFormOptions::builder()
//!     .trigger_selector("#save")
//!     .target_url("/api/profile")
//!     .before_request_condition(|| confirm_dialog())
//!     .after_request_success(|response| info_log!("saved {}", response))
//!     .redirect_url_on_success("/profile")
//!     .additional_data_fn(|| csrf_fields())
//!     .build();
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::callback::{Callback, HookBounds};
use crate::encoding::RequestEncoding;
use crate::error::{AjaxFormError, Result, TransportError};
use crate::error_log;
use crate::form_data::FormData;

/// Where to navigate after a submission completes.
#[derive(Debug, Clone)]
pub enum RedirectTarget {
	/// A literal URL
	Url(String),
	/// A function producing the URL when the outcome is dispatched
	Resolver(Callback<(), String>),
}

impl RedirectTarget {
	/// Resolves the target.
	///
	/// An empty literal counts as unset and yields `None`, letting the
	/// response-embedded URL take over.
	pub fn resolve(&self) -> Option<String> {
		match self {
			Self::Url(url) if url.is_empty() => None,
			Self::Url(url) => Some(url.clone()),
			Self::Resolver(resolver) => Some(resolver.invoke()),
		}
	}
}

impl From<&str> for RedirectTarget {
	fn from(url: &str) -> Self {
		Self::Url(url.to_string())
	}
}

impl From<String> for RedirectTarget {
	fn from(url: String) -> Self {
		Self::Url(url)
	}
}

/// Extra payload entries merged over the serialized form.
#[derive(Debug, Clone)]
pub enum AdditionalData {
	/// A literal mapping
	Fields(FormData),
	/// A function producing the mapping at submit time
	Resolver(Callback<(), FormData>),
}

impl AdditionalData {
	/// Resolves the mapping.
	pub fn resolve(&self) -> FormData {
		match self {
			Self::Fields(fields) => fields.clone(),
			Self::Resolver(resolver) => resolver.invoke(),
		}
	}
}

impl From<FormData> for AdditionalData {
	fn from(fields: FormData) -> Self {
		Self::Fields(fields)
	}
}

/// Configuration for a [`FormSubmitter`](crate::FormSubmitter).
///
/// All hooks default to absent.
#[derive(Debug, Clone, Default)]
pub struct AjaxFormOptions {
	pub(crate) trigger_selector: Option<String>,
	pub(crate) target_url: Option<String>,
	pub(crate) before_request_condition: Option<Callback<(), bool>>,
	pub(crate) before_request: Option<Callback<(), ()>>,
	pub(crate) after_request_success: Option<Callback<Value, ()>>,
	pub(crate) after_request_error: Option<Callback<TransportError, ()>>,
	pub(crate) redirect_url_on_success: Option<RedirectTarget>,
	pub(crate) redirect_url_on_error: Option<RedirectTarget>,
	pub(crate) additional_data: Option<AdditionalData>,
	pub(crate) encoding: RequestEncoding,
}

impl AjaxFormOptions {
	/// Starts building options.
	pub fn builder() -> AjaxFormOptionsBuilder {
		AjaxFormOptionsBuilder::default()
	}

	/// Selector of the element whose click starts a submission.
	pub fn trigger_selector(&self) -> Option<&str> {
		self.trigger_selector.as_deref()
	}

	/// Endpoint receiving the POST.
	pub fn target_url(&self) -> Option<&str> {
		self.target_url.as_deref()
	}

	/// Body encoding.
	pub fn encoding(&self) -> RequestEncoding {
		self.encoding
	}

	/// Configured success redirect, if any.
	pub fn redirect_url_on_success(&self) -> Option<&RedirectTarget> {
		self.redirect_url_on_success.as_ref()
	}

	/// Configured error redirect, if any.
	pub fn redirect_url_on_error(&self) -> Option<&RedirectTarget> {
		self.redirect_url_on_error.as_ref()
	}

	/// Configured additional data, if any.
	pub fn additional_data(&self) -> Option<&AdditionalData> {
		self.additional_data.as_ref()
	}

	/// Checks that both required options are present and non-blank.
	///
	/// Every missing option is reported on the diagnostic channel; the first
	/// one is returned as the error.
	pub fn validate(&self) -> Result<()> {
		let required = [
			("trigger_selector", &self.trigger_selector),
			("target_url", &self.target_url),
		];

		let mut first_missing = None;
		for (name, value) in required {
			let present = value.as_deref().is_some_and(|v| !v.trim().is_empty());
			if !present {
				error_log!("you have not defined option: {}", name);
				first_missing.get_or_insert(name);
			}
		}

		match first_missing {
			Some(name) => Err(AjaxFormError::MissingOption(name)),
			None => Ok(()),
		}
	}

	/// Returns a copy with `patch` applied.
	///
	/// Set fields replace the stored value and cleared fields unset it.
	/// Literal `additional_data` is deep-merged into an existing literal
	/// mapping; any other combination replaces it. Hook changes are applied
	/// after the data fields.
	pub fn merged(&self, patch: OptionsPatch) -> Self {
		let mut next = self.clone();

		if let Some(selector) = patch.trigger_selector {
			next.trigger_selector = selector;
		}
		if let Some(url) = patch.target_url {
			next.target_url = url;
		}
		if let Some(target) = patch.redirect_url_on_success {
			next.redirect_url_on_success = target.map(RedirectTarget::Url);
		}
		if let Some(target) = patch.redirect_url_on_error {
			next.redirect_url_on_error = target.map(RedirectTarget::Url);
		}
		if let Some(encoding) = patch.encoding {
			next.encoding = encoding;
		}
		match patch.additional_data {
			Some(Some(fields)) => {
				next.additional_data = Some(match next.additional_data.take() {
					Some(AdditionalData::Fields(mut existing)) => {
						deep_merge(&mut existing, fields);
						AdditionalData::Fields(existing)
					}
					_ => AdditionalData::Fields(fields),
				});
			}
			Some(None) => next.additional_data = None,
			None => {}
		}

		let hooks = patch.hooks;
		if let Some(hook) = hooks.before_request_condition {
			next.before_request_condition = hook;
		}
		if let Some(hook) = hooks.before_request {
			next.before_request = hook;
		}
		if let Some(hook) = hooks.after_request_success {
			next.after_request_success = hook;
		}
		if let Some(hook) = hooks.after_request_error {
			next.after_request_error = hook;
		}
		if let Some(target) = hooks.redirect_url_on_success {
			next.redirect_url_on_success = target;
		}
		if let Some(target) = hooks.redirect_url_on_error {
			next.redirect_url_on_error = target;
		}
		if let Some(data) = hooks.additional_data {
			next.additional_data = data;
		}

		next
	}
}

/// Recursively merges `source` into `target`; nested objects merge, every
/// other value replaces.
fn deep_merge(target: &mut FormData, source: FormData) {
	for (key, value) in source {
		match (target.get_mut(&key), value) {
			(Some(Value::Object(existing)), Value::Object(incoming)) => {
				deep_merge(existing, incoming);
			}
			(_, value) => {
				target.insert(key, value);
			}
		}
	}
}

/// Builder for [`AjaxFormOptions`].
#[derive(Debug, Default)]
pub struct AjaxFormOptionsBuilder {
	options: AjaxFormOptions,
}

impl AjaxFormOptionsBuilder {
	/// Sets the trigger element selector (required).
	pub fn trigger_selector(mut self, selector: impl Into<String>) -> Self {
		self.options.trigger_selector = Some(selector.into());
		self
	}

	/// Sets the submission endpoint (required).
	pub fn target_url(mut self, url: impl Into<String>) -> Self {
		self.options.target_url = Some(url.into());
		self
	}

	/// Predicate that must return `true` for the request to be sent.
	pub fn before_request_condition<F>(mut self, f: F) -> Self
	where
		F: Fn() -> bool + HookBounds + 'static,
	{
		self.options.before_request_condition = Some(Callback::from_fn(f));
		self
	}

	/// Hook run just before the payload is assembled.
	pub fn before_request<F>(mut self, f: F) -> Self
	where
		F: Fn() + HookBounds + 'static,
	{
		self.options.before_request = Some(Callback::from_fn(f));
		self
	}

	/// Hook receiving the parsed response of a successful request.
	pub fn after_request_success<F>(mut self, f: F) -> Self
	where
		F: Fn(Value) + HookBounds + 'static,
	{
		self.options.after_request_success = Some(Callback::new(f));
		self
	}

	/// Hook receiving the error of a failed request.
	pub fn after_request_error<F>(mut self, f: F) -> Self
	where
		F: Fn(TransportError) + HookBounds + 'static,
	{
		self.options.after_request_error = Some(Callback::new(f));
		self
	}

	/// Literal URL (or any [`RedirectTarget`]) to navigate to on success.
	pub fn redirect_url_on_success(mut self, target: impl Into<RedirectTarget>) -> Self {
		self.options.redirect_url_on_success = Some(target.into());
		self
	}

	/// Function producing the success redirect.
	pub fn redirect_url_on_success_fn<F>(mut self, f: F) -> Self
	where
		F: Fn() -> String + HookBounds + 'static,
	{
		self.options.redirect_url_on_success = Some(RedirectTarget::Resolver(Callback::from_fn(f)));
		self
	}

	/// Literal URL (or any [`RedirectTarget`]) to navigate to on failure.
	pub fn redirect_url_on_error(mut self, target: impl Into<RedirectTarget>) -> Self {
		self.options.redirect_url_on_error = Some(target.into());
		self
	}

	/// Function producing the error redirect.
	pub fn redirect_url_on_error_fn<F>(mut self, f: F) -> Self
	where
		F: Fn() -> String + HookBounds + 'static,
	{
		self.options.redirect_url_on_error = Some(RedirectTarget::Resolver(Callback::from_fn(f)));
		self
	}

	/// Literal mapping merged over the form data.
	pub fn additional_data(mut self, fields: FormData) -> Self {
		self.options.additional_data = Some(AdditionalData::Fields(fields));
		self
	}

	/// Function producing the mapping merged over the form data.
	pub fn additional_data_fn<F>(mut self, f: F) -> Self
	where
		F: Fn() -> FormData + HookBounds + 'static,
	{
		self.options.additional_data = Some(AdditionalData::Resolver(Callback::from_fn(f)));
		self
	}

	/// Request body encoding.
	pub fn encoding(mut self, encoding: RequestEncoding) -> Self {
		self.options.encoding = encoding;
		self
	}

	/// Finishes the builder. Required options are checked by the submitter.
	pub fn build(self) -> AjaxFormOptions {
		self.options
	}
}

/// Hook replacements carried by an [`OptionsPatch`].
///
/// `Some(None)` clears the hook.
#[derive(Debug, Clone, Default)]
pub struct HookPatch {
	before_request_condition: Option<Option<Callback<(), bool>>>,
	before_request: Option<Option<Callback<(), ()>>>,
	after_request_success: Option<Option<Callback<Value, ()>>>,
	after_request_error: Option<Option<Callback<TransportError, ()>>>,
	redirect_url_on_success: Option<Option<RedirectTarget>>,
	redirect_url_on_error: Option<Option<RedirectTarget>>,
	additional_data: Option<Option<AdditionalData>>,
}

/// A bulk update to [`AjaxFormOptions`].
///
/// The data fields deserialize from a JSON object (unknown keys are
/// rejected); hooks can only be set through the builder methods. An absent
/// key leaves the option alone while an explicit `null` clears it, so
/// `{"redirect_url_on_success": null}` drops a configured redirect and
/// `{"target_url": null}` is rejected by the submitter as a missing
/// required option. `encoding` has no unset state and ignores `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsPatch {
	#[serde(default, deserialize_with = "nullable")]
	trigger_selector: Option<Option<String>>,
	#[serde(default, deserialize_with = "nullable")]
	target_url: Option<Option<String>>,
	#[serde(default, deserialize_with = "nullable")]
	redirect_url_on_success: Option<Option<String>>,
	#[serde(default, deserialize_with = "nullable")]
	redirect_url_on_error: Option<Option<String>>,
	#[serde(default, deserialize_with = "nullable")]
	additional_data: Option<Option<FormData>>,
	encoding: Option<RequestEncoding>,
	#[serde(skip)]
	hooks: HookPatch,
}

/// Maps a present key to `Some`, so `null` becomes `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Some)
}

impl OptionsPatch {
	/// An empty patch.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a JSON object into a patch.
	///
	/// Returns `Ok(None)` when `value` is not an object; such values carry
	/// nothing to merge.
	pub fn from_json(value: Value) -> Result<Option<Self>> {
		if !value.is_object() {
			return Ok(None);
		}
		serde_json::from_value(value)
			.map(Some)
			.map_err(|e| AjaxFormError::InvalidPatch(e.to_string()))
	}

	/// Replaces the trigger selector.
	pub fn trigger_selector(mut self, selector: impl Into<String>) -> Self {
		self.trigger_selector = Some(Some(selector.into()));
		self
	}

	/// Replaces the target URL.
	pub fn target_url(mut self, url: impl Into<String>) -> Self {
		self.target_url = Some(Some(url.into()));
		self
	}

	/// Replaces the success redirect with a literal URL.
	pub fn redirect_url_on_success(mut self, url: impl Into<String>) -> Self {
		self.redirect_url_on_success = Some(Some(url.into()));
		self
	}

	/// Replaces the error redirect with a literal URL.
	pub fn redirect_url_on_error(mut self, url: impl Into<String>) -> Self {
		self.redirect_url_on_error = Some(Some(url.into()));
		self
	}

	/// Deep-merges literal fields into the additional data.
	pub fn additional_data(mut self, fields: FormData) -> Self {
		self.additional_data = Some(Some(fields));
		self
	}

	/// Replaces the body encoding.
	pub fn encoding(mut self, encoding: RequestEncoding) -> Self {
		self.encoding = Some(encoding);
		self
	}

	/// Replaces the precondition.
	pub fn before_request_condition<F>(mut self, f: F) -> Self
	where
		F: Fn() -> bool + HookBounds + 'static,
	{
		self.hooks.before_request_condition = Some(Some(Callback::from_fn(f)));
		self
	}

	/// Replaces the pre-request hook.
	pub fn before_request<F>(mut self, f: F) -> Self
	where
		F: Fn() + HookBounds + 'static,
	{
		self.hooks.before_request = Some(Some(Callback::from_fn(f)));
		self
	}

	/// Replaces the success hook.
	pub fn after_request_success<F>(mut self, f: F) -> Self
	where
		F: Fn(Value) + HookBounds + 'static,
	{
		self.hooks.after_request_success = Some(Some(Callback::new(f)));
		self
	}

	/// Replaces the error hook.
	pub fn after_request_error<F>(mut self, f: F) -> Self
	where
		F: Fn(TransportError) + HookBounds + 'static,
	{
		self.hooks.after_request_error = Some(Some(Callback::new(f)));
		self
	}

	/// Replaces the success redirect with a resolver.
	pub fn redirect_url_on_success_fn<F>(mut self, f: F) -> Self
	where
		F: Fn() -> String + HookBounds + 'static,
	{
		self.hooks.redirect_url_on_success = Some(Some(RedirectTarget::Resolver(Callback::from_fn(f))));
		self
	}

	/// Replaces the error redirect with a resolver.
	pub fn redirect_url_on_error_fn<F>(mut self, f: F) -> Self
	where
		F: Fn() -> String + HookBounds + 'static,
	{
		self.hooks.redirect_url_on_error = Some(Some(RedirectTarget::Resolver(Callback::from_fn(f))));
		self
	}

	/// Replaces the additional data with a resolver.
	pub fn additional_data_fn<F>(mut self, f: F) -> Self
	where
		F: Fn() -> FormData + HookBounds + 'static,
	{
		self.hooks.additional_data = Some(Some(AdditionalData::Resolver(Callback::from_fn(f))));
		self
	}

	/// Removes the precondition; every activation submits.
	pub fn clear_before_request_condition(mut self) -> Self {
		self.hooks.before_request_condition = Some(None);
		self
	}

	/// Removes the pre-request hook.
	pub fn clear_before_request(mut self) -> Self {
		self.hooks.before_request = Some(None);
		self
	}

	/// Removes the success hook.
	pub fn clear_after_request_success(mut self) -> Self {
		self.hooks.after_request_success = Some(None);
		self
	}

	/// Removes the error hook.
	pub fn clear_after_request_error(mut self) -> Self {
		self.hooks.after_request_error = Some(None);
		self
	}

	/// Removes the configured success redirect, literal or resolver.
	pub fn clear_redirect_url_on_success(mut self) -> Self {
		self.redirect_url_on_success = Some(None);
		self.hooks.redirect_url_on_success = None;
		self
	}

	/// Removes the configured error redirect, literal or resolver.
	pub fn clear_redirect_url_on_error(mut self) -> Self {
		self.redirect_url_on_error = Some(None);
		self.hooks.redirect_url_on_error = None;
		self
	}

	/// Removes the additional data, literal or resolver.
	pub fn clear_additional_data(mut self) -> Self {
		self.additional_data = Some(None);
		self.hooks.additional_data = None;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;

	fn fields(value: Value) -> FormData {
		value.as_object().cloned().unwrap_or_default()
	}

	#[fixture]
	fn options() -> AjaxFormOptions {
		AjaxFormOptions::builder()
			.trigger_selector("#submit")
			.target_url("/api/submit")
			.build()
	}

	#[rstest]
	fn test_defaults_have_no_hooks() {
		let options = AjaxFormOptions::default();
		assert!(options.before_request_condition.is_none());
		assert!(options.before_request.is_none());
		assert!(options.after_request_success.is_none());
		assert!(options.after_request_error.is_none());
		assert!(options.redirect_url_on_success.is_none());
		assert!(options.redirect_url_on_error.is_none());
		assert!(options.additional_data.is_none());
		assert_eq!(options.encoding(), RequestEncoding::FormUrlEncoded);
	}

	#[rstest]
	fn test_validate_accepts_required_options(options: AjaxFormOptions) {
		assert!(options.validate().is_ok());
	}

	#[rstest]
	#[case(None, Some("/api"), "trigger_selector")]
	#[case(Some("#go"), None, "target_url")]
	#[case(Some("#go"), Some("   "), "target_url")]
	#[case(None, None, "trigger_selector")]
	fn test_validate_rejects_missing(
		#[case] selector: Option<&str>,
		#[case] url: Option<&str>,
		#[case] expected: &'static str,
	) {
		let options = AjaxFormOptions {
			trigger_selector: selector.map(str::to_string),
			target_url: url.map(str::to_string),
			..Default::default()
		};

		assert_eq!(
			options.validate(),
			Err(AjaxFormError::MissingOption(expected))
		);
	}

	#[rstest]
	fn test_redirect_target_resolution() {
		assert_eq!(RedirectTarget::from("/done").resolve(), Some("/done".to_string()));
		assert_eq!(RedirectTarget::from("").resolve(), None);

		let resolver = RedirectTarget::Resolver(Callback::from_fn(|| "/computed".to_string()));
		assert_eq!(resolver.resolve(), Some("/computed".to_string()));
	}

	#[rstest]
	fn test_patch_replaces_target_url(options: AjaxFormOptions) {
		let patched = options.merged(OptionsPatch::new().target_url("/new"));
		assert_eq!(patched.target_url(), Some("/new"));
		assert_eq!(patched.trigger_selector(), Some("#submit"));
		// The original is untouched
		assert_eq!(options.target_url(), Some("/api/submit"));
	}

	#[rstest]
	fn test_patch_deep_merges_additional_data() {
		let options = AjaxFormOptions::builder()
			.trigger_selector("#submit")
			.target_url("/api")
			.additional_data(fields(json!({"source": "web", "meta": {"a": 1, "b": 2}})))
			.build();

		let patched = options.merged(
			OptionsPatch::new().additional_data(fields(json!({"meta": {"b": 3}, "extra": true}))),
		);

		let resolved = patched.additional_data().unwrap().resolve();
		assert_eq!(
			Value::Object(resolved),
			json!({"source": "web", "meta": {"a": 1, "b": 3}, "extra": true})
		);
	}

	#[rstest]
	fn test_patch_hook_replaces_resolver(options: AjaxFormOptions) {
		let patched = options.merged(
			OptionsPatch::new().redirect_url_on_success_fn(|| "/from-fn".to_string()),
		);
		assert_eq!(
			patched.redirect_url_on_success().unwrap().resolve(),
			Some("/from-fn".to_string())
		);
	}

	#[rstest]
	fn test_patch_from_json_object() {
		let patch = OptionsPatch::from_json(json!({"target_url": "/new", "encoding": "json"}))
			.unwrap()
			.unwrap();
		assert_eq!(patch.target_url, Some(Some("/new".to_string())));
		assert_eq!(patch.encoding, Some(RequestEncoding::Json));
	}

	#[rstest]
	#[case(json!("target_url"))]
	#[case(json!(42))]
	#[case(json!(null))]
	#[case(json!(["target_url", "/new"]))]
	fn test_patch_from_json_non_object_ignored(#[case] value: Value) {
		assert!(OptionsPatch::from_json(value).unwrap().is_none());
	}

	#[rstest]
	fn test_patch_from_json_absent_key_leaves_option() {
		let options = AjaxFormOptions::builder()
			.trigger_selector("#submit")
			.target_url("/api")
			.redirect_url_on_success("/done")
			.build();

		let patch = OptionsPatch::from_json(json!({"target_url": "/v2"})).unwrap().unwrap();
		let patched = options.merged(patch);

		assert_eq!(
			patched.redirect_url_on_success().unwrap().resolve(),
			Some("/done".to_string())
		);
	}

	#[rstest]
	fn test_patch_from_json_null_clears_optional() {
		let options = AjaxFormOptions::builder()
			.trigger_selector("#submit")
			.target_url("/api")
			.redirect_url_on_success("/done")
			.redirect_url_on_error_fn(|| "/oops".to_string())
			.additional_data(fields(json!({"source": "web"})))
			.build();

		let patch = OptionsPatch::from_json(json!({
			"redirect_url_on_success": null,
			"redirect_url_on_error": null,
			"additional_data": null
		}))
		.unwrap()
		.unwrap();
		let patched = options.merged(patch);

		assert!(patched.redirect_url_on_success().is_none());
		assert!(patched.redirect_url_on_error().is_none());
		assert!(patched.additional_data().is_none());
	}

	#[rstest]
	fn test_patch_from_json_null_required_fails_validation(options: AjaxFormOptions) {
		let patch = OptionsPatch::from_json(json!({"target_url": null})).unwrap().unwrap();
		let patched = options.merged(patch);

		assert_eq!(patched.target_url(), None);
		assert_eq!(
			patched.validate(),
			Err(AjaxFormError::MissingOption("target_url"))
		);
	}

	#[rstest]
	fn test_patch_clears_hooks() {
		let options = AjaxFormOptions::builder()
			.trigger_selector("#submit")
			.target_url("/api")
			.before_request_condition(|| false)
			.after_request_success(|_| {})
			.redirect_url_on_success_fn(|| "/next".to_string())
			.build();

		let patched = options.merged(
			OptionsPatch::new()
				.clear_before_request_condition()
				.clear_after_request_success()
				.clear_redirect_url_on_success(),
		);

		assert!(patched.before_request_condition.is_none());
		assert!(patched.after_request_success.is_none());
		assert!(patched.redirect_url_on_success().is_none());
	}

	#[rstest]
	fn test_patch_resolver_after_clear_wins(options: AjaxFormOptions) {
		let patched = options.merged(
			OptionsPatch::new()
				.clear_redirect_url_on_error()
				.redirect_url_on_error_fn(|| "/retry".to_string()),
		);
		assert_eq!(
			patched.redirect_url_on_error().unwrap().resolve(),
			Some("/retry".to_string())
		);
	}

	#[rstest]
	fn test_patch_from_json_unknown_key_rejected() {
		let result = OptionsPatch::from_json(json!({"after_request_success": "alert"}));
		assert!(matches!(result, Err(AjaxFormError::InvalidPatch(_))));
	}
}
