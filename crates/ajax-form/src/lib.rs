//! ajax-form - Asynchronous Form Submission for WASM Pages
//!
//! Binds a trigger element to a form so that activating the trigger
//! serializes the form, merges caller-supplied data, POSTs it, and dispatches
//! the outcome to hooks and an optional redirect.
//!
//! ## Lifecycle
//!
//! ```text
//! configure ──▶ bind ──▶ submit ──▶ dispatch outcome
//!   options      click     POST      success/error hook + redirect
//! ```
//!
//! ## Modules
//!
//! - [`options`]: Immutable configuration, builder and runtime patches
//! - [`form_data`]: Form control model and serialization rules
//! - [`encoding`]: Request body encoding
//! - [`transport`]: Network boundary (`reqwest`)
//! - [`navigation`]: Redirect boundary (`location.replace`)
//! - [`submitter`]: The submit pipeline
//! - `dom`: Browser bindings (WASM only)
//! - [`testing`]: Collaborator doubles for off-browser tests
//!
//! ## Example
//!
//! ```ignore
//! use ajax_form::{AjaxFormOptions, FormSubmitter};
//!
//! let options = AjaxFormOptions::builder()
//!     .trigger_selector("#save-profile")
//!     .target_url("/api/profile")
//!     .after_request_error(|err| error_log!("save failed: {}", err))
//!     .redirect_url_on_success("/profile")
//!     .build();
//!
//! // Keep the submitter around to patch options later
//! let submitter = FormSubmitter::attach(form_element, options)?;
//! submitter.set_options(OptionsPatch::new().target_url("/api/profile/v2"))?;
//! ```

#![warn(missing_docs)]

pub mod callback;
pub mod encoding;
pub mod error;
pub mod form_data;
pub mod logging;
pub mod navigation;
pub mod options;
pub mod submitter;
pub mod testing;
pub mod transport;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use callback::{Callback, HookBounds};
pub use encoding::RequestEncoding;
pub use error::{AjaxFormError, Result, TransportError};
pub use form_data::{
	FormControl, FormData, FormSource, SelectOption, StaticForm, get_form_data, serialize_controls,
};
pub use navigation::{Navigator, REDIRECT_URL_FIELD};
pub use options::{AdditionalData, AjaxFormOptions, AjaxFormOptionsBuilder, OptionsPatch, RedirectTarget};
pub use submitter::{FormSubmitter, SubmitOutcome, TriggerEvent};
pub use transport::{ReqwestTransport, SubmitRequest, Transport};

#[cfg(target_arch = "wasm32")]
pub use dom::DomForm;
#[cfg(target_arch = "wasm32")]
pub use navigation::LocationNavigator;
