//! The submit pipeline.
//!
//! ## Pipeline
//!
//! ```text
//! trigger ──▶ condition? ──false──▶ Aborted
//!                │ true
//!                ▼
//!          before_request
//!                │
//!                ▼
//!   form data ◀── overlay ── additional_data
//!                │
//!                ▼
//!          Transport::post ───────── await ─────────┐
//!                                                   ▼
//!                     ┌──────── Ok ────────┬──────── Err ────────┐
//!                     ▼                    │                     ▼
//!          after_request_success           │          after_request_error
//!                     │                    │                     │
//!                     ▼                    │                     ▼
//!        redirect (configured/body)        │       redirect (configured/body)
//! ```
//!
//! Each call to [`FormSubmitter::submit`] is an independent pipeline. Nothing
//! coordinates overlapping submissions: responses are dispatched in
//! completion order.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use serde_json::Value;

use crate::error::{Result, TransportError};
use crate::form_data::{FormData, FormSource, get_form_data, merge_payload};
use crate::navigation::{Navigator, resolve_redirect};
use crate::options::{AjaxFormOptions, OptionsPatch};
use crate::transport::{SubmitRequest, Transport};
use crate::{debug_log, error_log, info_log, warn_log};

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
	/// `before_request_condition` returned `false`; nothing was sent.
	Aborted,
	/// The request succeeded.
	Succeeded {
		/// Parsed response body
		response: Value,
		/// Navigation target, if any
		redirect: Option<String>,
	},
	/// The request failed.
	Failed {
		/// Failure reported by the transport
		error: TransportError,
		/// Navigation target, if any
		redirect: Option<String>,
	},
}

impl SubmitOutcome {
	/// Navigation target chosen for this outcome.
	pub fn redirect(&self) -> Option<&str> {
		match self {
			Self::Aborted => None,
			Self::Succeeded { redirect, .. } | Self::Failed { redirect, .. } => redirect.as_deref(),
		}
	}

	/// Whether the submission was stopped by its precondition.
	pub fn is_aborted(&self) -> bool {
		matches!(self, Self::Aborted)
	}
}

/// An activation event whose default action can be suppressed.
pub trait TriggerEvent {
	/// Suppresses the control's default action.
	fn prevent_default(&self);
}

struct SubmitterInner {
	form: Rc<dyn FormSource>,
	options: RefCell<Rc<AjaxFormOptions>>,
	transport: Rc<dyn Transport>,
	navigator: Rc<dyn Navigator>,
	in_flight: Cell<usize>,
}

/// Decrements the in-flight counter when a pipeline leaves the network stage.
struct InFlightGuard<'a>(&'a Cell<usize>);

impl<'a> InFlightGuard<'a> {
	fn enter(counter: &'a Cell<usize>) -> Self {
		counter.set(counter.get() + 1);
		Self(counter)
	}
}

impl Drop for InFlightGuard<'_> {
	fn drop(&mut self) {
		self.0.set(self.0.get().saturating_sub(1));
	}
}

/// Binds a form to an asynchronous submission.
///
/// The caller owns the submitter; clones share configuration and state.
///
/// # Examples
///
/// ```ignore
/// let submitter = FormSubmitter::new(form, options, transport, navigator)?;
/// match submitter.submit().await {
///     SubmitOutcome::Succeeded { response, .. } => info_log!("saved {}", response),
///     SubmitOutcome::Failed { error, .. } => error_log!("{}", error),
///     SubmitOutcome::Aborted => {}
/// }
/// ```
#[derive(Clone)]
pub struct FormSubmitter {
	inner: Rc<SubmitterInner>,
}

impl std::fmt::Debug for FormSubmitter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FormSubmitter")
			.field("options", &self.inner.options.borrow())
			.field("in_flight", &self.inner.in_flight.get())
			.finish_non_exhaustive()
	}
}

impl FormSubmitter {
	/// Creates a submitter over `form`.
	///
	/// Fails with [`MissingOption`](crate::AjaxFormError::MissingOption) when
	/// `trigger_selector` or `target_url` is absent; the omission is also
	/// logged.
	pub fn new(
		form: Rc<dyn FormSource>,
		options: AjaxFormOptions,
		transport: Rc<dyn Transport>,
		navigator: Rc<dyn Navigator>,
	) -> Result<Self> {
		options.validate()?;

		Ok(Self {
			inner: Rc::new(SubmitterInner {
				form,
				options: RefCell::new(Rc::new(options)),
				transport,
				navigator,
				in_flight: Cell::new(0),
			}),
		})
	}

	/// Snapshot of the current options.
	pub fn options(&self) -> Rc<AjaxFormOptions> {
		Rc::clone(&self.inner.options.borrow())
	}

	/// Number of submissions currently awaiting a response.
	pub fn in_flight(&self) -> usize {
		self.inner.in_flight.get()
	}

	/// Serializes the bound form without submitting it.
	pub fn form_data(&self) -> FormData {
		get_form_data(self.inner.form.as_ref())
	}

	/// Applies a bulk update for subsequent submissions.
	///
	/// Rejected (and nothing changes) when the result would lack a required
	/// option. In-flight submissions keep their snapshot.
	pub fn set_options(&self, patch: OptionsPatch) -> Result<()> {
		let next = self.options().merged(patch);
		next.validate()?;
		*self.inner.options.borrow_mut() = Rc::new(next);
		Ok(())
	}

	/// Deep-merges a JSON object into the options.
	///
	/// Returns `Ok(false)` without changing anything when `value` is not an
	/// object (for example a bare key string).
	pub fn set_options_json(&self, value: Value) -> Result<bool> {
		match OptionsPatch::from_json(value)? {
			Some(patch) => {
				self.set_options(patch)?;
				Ok(true)
			}
			None => {
				warn_log!("ignoring options update: expected a JSON object");
				Ok(false)
			}
		}
	}

	/// Handles an activation of the trigger element.
	///
	/// The event's default action is suppressed immediately; the returned
	/// future runs the pipeline.
	pub fn activate(&self, event: &dyn TriggerEvent) -> impl Future<Output = SubmitOutcome> + use<> {
		event.prevent_default();
		let submitter = self.clone();
		async move { submitter.submit().await }
	}

	/// Runs the submit pipeline once.
	///
	/// Failures are reported through the error hook and redirect only; this
	/// never returns an error.
	pub async fn submit(&self) -> SubmitOutcome {
		let options = self.options();

		if let Some(condition) = &options.before_request_condition
			&& !condition.invoke()
		{
			debug_log!("before_request_condition returned false; submission aborted");
			return SubmitOutcome::Aborted;
		}

		if let Some(hook) = &options.before_request {
			hook.invoke();
		}

		let payload = self.assemble_payload(&options);
		// validate() guarantees the URL is present
		let url = options.target_url.clone().unwrap_or_default();
		info_log!("submitting form to {}", url);

		let request = SubmitRequest {
			url,
			payload,
			encoding: options.encoding,
		};

		let result = {
			let _guard = InFlightGuard::enter(&self.inner.in_flight);
			self.inner.transport.post(request).await
		};

		match result {
			Ok(response) => self.dispatch_success(&options, response),
			Err(error) => self.dispatch_error(&options, error),
		}
	}

	fn assemble_payload(&self, options: &AjaxFormOptions) -> FormData {
		let form_data = get_form_data(self.inner.form.as_ref());
		match &options.additional_data {
			Some(additional) => merge_payload(form_data, additional.resolve()),
			None => form_data,
		}
	}

	fn dispatch_success(&self, options: &AjaxFormOptions, response: Value) -> SubmitOutcome {
		debug_log!("submission succeeded: {}", response);

		if let Some(hook) = &options.after_request_success {
			hook.call(response.clone());
		}

		let redirect = resolve_redirect(options.redirect_url_on_success.as_ref(), Some(&response));
		self.navigate(redirect.as_deref());

		SubmitOutcome::Succeeded { response, redirect }
	}

	fn dispatch_error(&self, options: &AjaxFormOptions, error: TransportError) -> SubmitOutcome {
		warn_log!("submission failed: {}", error);

		if let Some(hook) = &options.after_request_error {
			hook.call(error.clone());
		}

		let redirect = resolve_redirect(options.redirect_url_on_error.as_ref(), error.body());
		self.navigate(redirect.as_deref());

		SubmitOutcome::Failed { error, redirect }
	}

	fn navigate(&self, target: Option<&str>) {
		let Some(url) = target else {
			return;
		};
		info_log!("redirecting to {}", url);
		if let Err(err) = self.inner.navigator.replace(url) {
			error_log!("{}", err);
		}
	}
}
