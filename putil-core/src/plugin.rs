//! The `platform_util` method-call dispatcher.
//!
//! One instance per host view.  Calls arrive synchronously on the host's UI
//! thread; each one completes before the next arrives, so the only state --
//! the root window handle -- is written once by `init` and read thereafter.
//!
//! # Failure semantics
//!
//! No OS error codes cross the channel.  A failed rect query answers the
//! empty mapping, a failed move still answers `true`; both are logged via
//! the `log` facade so a hosting shell with a logger installed can see them.

use serde_json::{json, Value};

use crate::channel::{Method, MethodResponse};
use crate::rect::{RectPayload, SetRectArgs};
use crate::window::{place_window, WindowSystem};

/// The null window handle, used before `init` has resolved the real one.
const NULL_WINDOW: isize = 0;

/// Plugin instance bound to one host view.
pub struct PlatformUtil<S: WindowSystem> {
    system: S,
    view_window: isize,
    root_window: Option<isize>,
}

impl<S: WindowSystem> PlatformUtil<S> {
    /// Create a plugin instance for the host view with handle `view_window`.
    pub fn new(system: S, view_window: isize) -> Self {
        Self {
            system,
            view_window,
            root_window: None,
        }
    }

    /// Handle one method call from the channel.
    ///
    /// Synchronous; every path produces a response.  Unknown method names
    /// answer [`MethodResponse::NotImplemented`].
    pub fn handle_call(&mut self, method: &str, args: &Value) -> MethodResponse {
        let Some(method) = Method::from_name(method) else {
            return MethodResponse::NotImplemented;
        };

        log::debug!("platform_util: {}", method.name());
        match method {
            Method::Init => MethodResponse::Success(json!(self.init())),
            Method::GetWindowRect => MethodResponse::Success(self.get_window_rect()),
            Method::SetWindowRect => MethodResponse::Success(json!(self.set_window_rect(args))),
        }
    }

    /// The window later calls operate on: the stored root handle, or the
    /// null handle before `init`.
    fn window(&self) -> isize {
        self.root_window.unwrap_or(NULL_WINDOW)
    }

    /// Resolve and store the root window handle.  Always reports `true`;
    /// a failed resolution stores the null handle and later calls take the
    /// masked-failure paths.
    fn init(&mut self) -> bool {
        self.root_window = Some(self.system.root_window(self.view_window));
        true
    }

    /// Rect mapping with float values, or the empty mapping when the query
    /// fails.
    fn get_window_rect(&self) -> Value {
        match self.system.window_rect(self.window()) {
            Ok(bounds) => RectPayload::from(bounds).to_value(),
            Err(err) => {
                log::warn!("getWindowRect: query failed for window {:#x}: {err}", self.window());
                json!({})
            }
        }
    }

    /// Parse the argument mapping (absent keys read 0.0), apply it, and
    /// report `true` regardless of the OS outcome.
    fn set_window_rect(&self, args: &Value) -> bool {
        let bounds = SetRectArgs::from_args(args).to_bounds();
        place_window(&self.system, self.window(), bounds);
        true
    }
}
