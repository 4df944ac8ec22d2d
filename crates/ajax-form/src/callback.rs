//! Callback types for submission hooks.
//!
//! Every hook in [`AjaxFormOptions`](crate::AjaxFormOptions) is an optional
//! [`Callback`]. Presence is checked by the type system (`Option<Callback>`)
//! rather than by inspecting values at runtime.
//!
//! ## Example
//!
//! ```ignore
//! use ajax_form::Callback;
//!
//! let on_success = Callback::new(|response: serde_json::Value| {
//!     info_log!("saved: {}", response);
//! });
//! on_success.call(serde_json::json!({"id": 1}));
//! ```

use std::sync::Arc;

/// Thread-safety bounds required of hook closures.
///
/// On native targets hooks must be `Send + Sync` so options can be shared
/// freely; in the browser there is a single thread and no bound applies.
#[cfg(not(target_arch = "wasm32"))]
pub trait HookBounds: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync> HookBounds for T {}

/// Thread-safety bounds required of hook closures (WASM: none).
#[cfg(target_arch = "wasm32")]
pub trait HookBounds {}

#[cfg(target_arch = "wasm32")]
impl<T> HookBounds for T {}

#[cfg(not(target_arch = "wasm32"))]
type HookFn<Args, Ret> = dyn Fn(Args) -> Ret + Send + Sync + 'static;

#[cfg(target_arch = "wasm32")]
type HookFn<Args, Ret> = dyn Fn(Args) -> Ret + 'static;

/// A cloneable, type-safe wrapper around a hook function.
///
/// `Callback` stores the function behind an `Arc`, so cloning options or
/// snapshotting them for an in-flight submission never clones the closure.
pub struct Callback<Args = (), Ret = ()> {
	inner: Arc<HookFn<Args, Ret>>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + HookBounds + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Ret> Callback<(), Ret> {
	/// Wraps a zero-argument closure.
	pub fn from_fn<F>(f: F) -> Self
	where
		F: Fn() -> Ret + HookBounds + 'static,
	{
		Self::new(move |()| f())
	}

	/// Calls a zero-argument callback.
	pub fn invoke(&self) -> Ret {
		self.call(())
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}
