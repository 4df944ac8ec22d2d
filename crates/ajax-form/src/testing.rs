//! Test doubles for the submitter's collaborators.
//!
//! These let the full pipeline run off-browser:
//!
//! - [`MockTransport`]: records requests and replays scripted replies
//! - [`RecordingNavigator`]: records redirect targets instead of navigating
//! - [`TestEvent`]: a trigger event that remembers `prevent_default`

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AjaxFormError, Result, TransportError};
use crate::navigation::Navigator;
use crate::submitter::TriggerEvent;
use crate::transport::{SubmitRequest, Transport};

/// A [`Transport`] with scripted replies.
///
/// Replies are consumed in order; when the queue is empty every request
/// succeeds with an empty JSON object.
#[derive(Debug, Default)]
pub struct MockTransport {
	replies: RefCell<VecDeque<std::result::Result<Value, TransportError>>>,
	requests: RefCell<Vec<SubmitRequest>>,
}

impl MockTransport {
	/// A transport with no scripted replies.
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues a successful reply.
	pub fn push_ok(&self, body: Value) {
		self.replies.borrow_mut().push_back(Ok(body));
	}

	/// Queues a failed reply.
	pub fn push_err(&self, error: TransportError) {
		self.replies.borrow_mut().push_back(Err(error));
	}

	/// Requests received so far.
	pub fn requests(&self) -> Vec<SubmitRequest> {
		self.requests.borrow().clone()
	}

	/// The most recent request.
	pub fn last_request(&self) -> Option<SubmitRequest> {
		self.requests.borrow().last().cloned()
	}
}

#[async_trait(?Send)]
impl Transport for MockTransport {
	async fn post(&self, request: SubmitRequest) -> std::result::Result<Value, TransportError> {
		self.requests.borrow_mut().push(request);
		self.replies
			.borrow_mut()
			.pop_front()
			.unwrap_or_else(|| Ok(Value::Object(Default::default())))
	}
}

/// A [`Navigator`] that records targets.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
	visits: RefCell<Vec<String>>,
	failure: RefCell<Option<String>>,
}

impl RecordingNavigator {
	/// A navigator that accepts every target.
	pub fn new() -> Self {
		Self::default()
	}

	/// Makes every later navigation fail with `message` (targets are still
	/// recorded).
	pub fn fail_with(&self, message: impl Into<String>) {
		*self.failure.borrow_mut() = Some(message.into());
	}

	/// Targets navigated to, in order.
	pub fn visits(&self) -> Vec<String> {
		self.visits.borrow().clone()
	}
}

impl Navigator for RecordingNavigator {
	fn replace(&self, url: &str) -> Result<()> {
		self.visits.borrow_mut().push(url.to_string());
		match self.failure.borrow().as_ref() {
			Some(message) => Err(AjaxFormError::Navigation {
				url: url.to_string(),
				message: message.clone(),
			}),
			None => Ok(()),
		}
	}
}

/// A trigger event for tests.
#[derive(Debug, Default)]
pub struct TestEvent {
	default_prevented: Cell<bool>,
}

impl TestEvent {
	/// A fresh event.
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether `prevent_default` was called.
	pub fn default_prevented(&self) -> bool {
		self.default_prevented.get()
	}
}

impl TriggerEvent for TestEvent {
	fn prevent_default(&self) {
		self.default_prevented.set(true);
	}
}
