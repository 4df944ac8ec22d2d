//! Error types for form submission.
//!
//! Two families of errors exist:
//!
//! - [`AjaxFormError`]: configuration and binding problems, returned to the
//!   caller from construction, binding and option patching.
//! - [`TransportError`]: request failures. These never leave the submit
//!   pipeline; they are handed to the `after_request_error` hook and used for
//!   the error redirect.

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced to the owner of a [`FormSubmitter`](crate::FormSubmitter).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AjaxFormError {
	/// A required option (`trigger_selector` or `target_url`) is absent or blank.
	#[error("missing required option: {0}")]
	MissingOption(&'static str),

	/// A JSON options patch could not be applied.
	#[error("invalid options patch: {0}")]
	InvalidPatch(String),

	/// A DOM operation failed (element lookup, listener registration).
	#[error("DOM error: {0}")]
	Dom(String),

	/// Navigating to a redirect target failed.
	#[error("navigation to {url} failed: {message}")]
	Navigation {
		/// Redirect target
		url: String,
		/// Browser-provided reason
		message: String,
	},
}

/// Result alias for operations that return [`AjaxFormError`].
pub type Result<T> = std::result::Result<T, AjaxFormError>;

/// A failed submission request.
///
/// Any non-2xx status, connection failure or unparseable body is a transport
/// error; the pipeline does not branch on the kind. Whenever the server
/// answered, the raw response text is kept so hooks can inspect it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
	/// The request never produced a response (connection refused, CORS, ...)
	#[error("network error: {0}")]
	Network(String),

	/// The server answered with a non-success status
	#[error("server responded with status {status}")]
	Status {
		/// HTTP status code
		status: u16,
		/// Response body, when it parsed as JSON
		body: Option<Value>,
		/// Raw response text
		text: String,
	},

	/// A success response whose body was not valid JSON
	#[error("failed to decode response with status {status}: {message}")]
	Decode {
		/// HTTP status code
		status: u16,
		/// Parser message
		message: String,
		/// Raw response text
		text: String,
	},

	/// The payload could not be encoded or the URL could not be resolved
	#[error("failed to encode request: {0}")]
	Encode(String),
}

impl TransportError {
	/// Create a network error
	pub fn network(msg: impl Into<String>) -> Self {
		Self::Network(msg.into())
	}

	/// Create a status error from the raw response text
	///
	/// The text is parsed as JSON on a best-effort basis for [`body`](Self::body).
	pub fn status(status: u16, text: impl Into<String>) -> Self {
		let text = text.into();
		let body = serde_json::from_str(&text).ok();
		Self::Status { status, body, text }
	}

	/// Create a decode error
	pub fn decode(status: u16, message: impl Into<String>, text: impl Into<String>) -> Self {
		Self::Decode {
			status,
			message: message.into(),
			text: text.into(),
		}
	}

	/// Create an encode error
	pub fn encode(msg: impl Into<String>) -> Self {
		Self::Encode(msg.into())
	}

	/// HTTP status code, if the server responded.
	pub fn status_code(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } | Self::Decode { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Parsed body of an error response, if any.
	pub fn body(&self) -> Option<&Value> {
		match self {
			Self::Status { body, .. } => body.as_ref(),
			_ => None,
		}
	}

	/// Raw response text, if the server responded.
	pub fn response_text(&self) -> Option<&str> {
		match self {
			Self::Status { text, .. } | Self::Decode { text, .. } => Some(text),
			_ => None,
		}
	}
}
