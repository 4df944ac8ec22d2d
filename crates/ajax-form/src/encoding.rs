//! Request body encoding.
//!
//! Payloads are flat at the form level but `additional_data` may carry nested
//! JSON. The default URL-encoded body flattens nesting with bracket notation:
//!
//! | Payload                      | Encoded pairs             |
//! |------------------------------|---------------------------|
//! | `{"a": [1, 2]}`              | `a[]=1`, `a[]=2`          |
//! | `{"o": {"k": "v"}}`          | `o[k]=v`                  |
//! | `{"l": [{"x": 1}]}`          | `l[0][x]=1`               |
//! | `{"n": null}`                | `n=`                      |

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TransportError;
use crate::form_data::FormData;

/// Body encoding used for the submission request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestEncoding {
	/// `application/x-www-form-urlencoded` with bracket notation for nesting
	#[default]
	FormUrlEncoded,
	/// `application/json`
	Json,
}

impl RequestEncoding {
	/// `Content-Type` header value for this encoding.
	pub fn content_type(self) -> &'static str {
		match self {
			Self::FormUrlEncoded => "application/x-www-form-urlencoded; charset=UTF-8",
			Self::Json => "application/json",
		}
	}

	/// Encodes a payload into a request body.
	pub fn encode(self, payload: &FormData) -> Result<String, TransportError> {
		match self {
			Self::FormUrlEncoded => serde_urlencoded::to_string(to_param_pairs(payload))
				.map_err(|e| TransportError::encode(e.to_string())),
			Self::Json => {
				serde_json::to_string(payload).map_err(|e| TransportError::encode(e.to_string()))
			}
		}
	}
}

/// Flattens a payload into ordered key/value pairs using bracket notation.
pub fn to_param_pairs(payload: &FormData) -> Vec<(String, String)> {
	let mut pairs = Vec::new();
	for (key, value) in payload {
		build_params(key, value, &mut pairs);
	}
	pairs
}

fn build_params(prefix: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
	match value {
		Value::Array(items) => {
			for (index, item) in items.iter().enumerate() {
				if is_scalar(item) {
					pairs.push((format!("{prefix}[]"), scalar_to_string(item)));
				} else {
					build_params(&format!("{prefix}[{index}]"), item, pairs);
				}
			}
		}
		Value::Object(map) => {
			for (name, item) in map {
				build_params(&format!("{prefix}[{name}]"), item, pairs);
			}
		}
		scalar => pairs.push((prefix.to_string(), scalar_to_string(scalar))),
	}
}

fn is_scalar(value: &Value) -> bool {
	!matches!(value, Value::Array(_) | Value::Object(_))
}

fn scalar_to_string(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		// Containers are expanded by build_params before reaching here
		other => other.to_string(),
	}
}
