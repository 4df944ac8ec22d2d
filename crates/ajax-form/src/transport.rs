//! Network boundary.
//!
//! The submitter issues exactly one [`Transport::post`] per submission.
//! [`ReqwestTransport`] is the production implementation; on WASM `reqwest`
//! is backed by `fetch`, so the browser's cookies and CORS rules apply.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::encoding::RequestEncoding;
use crate::error::TransportError;
use crate::form_data::FormData;

/// `Accept` header sent with every submission.
pub const ACCEPT_JSON: &str = "application/json, text/javascript, */*; q=0.01";

/// One submission request.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
	/// Target URL, possibly relative to the page
	pub url: String,
	/// Merged payload
	pub payload: FormData,
	/// Body encoding
	pub encoding: RequestEncoding,
}

/// Sends a submission and returns the parsed response body.
///
/// Implementations treat any non-2xx status, connection failure or
/// unparseable body as an error. A success with an empty body yields
/// [`Value::Null`].
#[async_trait(?Send)]
pub trait Transport {
	/// POSTs the request.
	async fn post(&self, request: SubmitRequest) -> Result<Value, TransportError>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
	client: Client,
	base_url: Option<Url>,
}

impl ReqwestTransport {
	/// A transport that requires absolute target URLs.
	pub fn new() -> Self {
		Self::default()
	}

	/// Uses a preconfigured client (timeouts, default headers, ...).
	pub fn with_client(client: Client) -> Self {
		Self {
			client,
			base_url: None,
		}
	}

	/// Resolves relative target URLs against `base_url`.
	pub fn with_base_url(mut self, base_url: Url) -> Self {
		self.base_url = Some(base_url);
		self
	}

	/// A transport resolving relative URLs against the current page.
	#[cfg(target_arch = "wasm32")]
	pub fn for_current_page() -> Result<Self, TransportError> {
		let href = web_sys::window()
			.ok_or_else(|| TransportError::encode("no global window"))?
			.location()
			.href()
			.map_err(|e| TransportError::encode(format!("{:?}", e)))?;
		let base_url = Url::parse(&href).map_err(|e| TransportError::encode(e.to_string()))?;
		Ok(Self::new().with_base_url(base_url))
	}

	/// Resolves a target URL against the base URL, if any.
	pub fn resolve_url(&self, url: &str) -> Result<Url, TransportError> {
		let resolved = match &self.base_url {
			Some(base) => base.join(url),
			None => Url::parse(url),
		};
		resolved.map_err(|e| TransportError::encode(format!("invalid target url {url:?}: {e}")))
	}
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
	async fn post(&self, request: SubmitRequest) -> Result<Value, TransportError> {
		let url = self.resolve_url(&request.url)?;
		let body = request.encoding.encode(&request.payload)?;

		let response = self
			.client
			.post(url)
			.header(CONTENT_TYPE, request.encoding.content_type())
			.header(ACCEPT, ACCEPT_JSON)
			.body(body)
			.send()
			.await
			.map_err(|e| TransportError::network(e.to_string()))?;

		let status = response.status();
		let text = response
			.text()
			.await
			.map_err(|e| TransportError::network(e.to_string()))?;

		if !status.is_success() {
			return Err(TransportError::status(status.as_u16(), text));
		}

		// 204 and other bodiless successes
		if text.trim().is_empty() {
			return Ok(Value::Null);
		}

		serde_json::from_str(&text)
			.map_err(|e| TransportError::decode(status.as_u16(), e.to_string(), text))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_resolve_relative_url_against_base() {
		let transport = ReqwestTransport::new()
			.with_base_url(Url::parse("https://example.com/accounts/edit").unwrap());

		let url = transport.resolve_url("/api/profile").unwrap();
		assert_eq!(url.as_str(), "https://example.com/api/profile");

		let url = transport.resolve_url("save").unwrap();
		assert_eq!(url.as_str(), "https://example.com/accounts/save");
	}

	#[rstest]
	fn test_relative_url_without_base_rejected() {
		let transport = ReqwestTransport::new();
		let err = transport.resolve_url("/api/profile").unwrap_err();
		assert!(matches!(err, TransportError::Encode(_)));
	}

	#[rstest]
	fn test_absolute_url_without_base() {
		let transport = ReqwestTransport::new();
		let url = transport.resolve_url("http://localhost:8000/submit").unwrap();
		assert_eq!(url.path(), "/submit");
	}
}
