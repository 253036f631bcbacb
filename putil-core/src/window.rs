//! Window-system seam and the off-screen placement heuristic.
//!
//! [`WindowSystem`] abstracts the handful of OS touchpoints the dispatcher
//! needs, so the channel logic compiles and tests on any host.  The real
//! implementation lives in [`crate::win32`]; tests use an in-memory fake.

use crate::errors::PlatformUtilError;
use crate::rect::Bounds;

/// Screen rectangle of a monitor, in the OS's edge convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// The OS touchpoints behind the three channel methods.
pub trait WindowSystem {
    /// Top-level ancestor of `view` -- the root of the containment chain.
    fn root_window(&self, view: isize) -> isize;

    /// Bounding rectangle of `window` in screen coordinates.
    fn window_rect(&self, window: isize) -> Result<Bounds, PlatformUtilError>;

    /// Reposition/resize `window` without position-change notifications.
    fn move_window(&self, window: isize, bounds: Bounds) -> Result<(), PlatformUtilError>;

    /// Monitor whose bounds intersect `window`, if any.
    fn monitor_containing(&self, window: isize) -> Option<MonitorBounds>;

    /// Nearest monitor to `window`, else the primary.
    fn fallback_monitor(&self, window: isize) -> Option<MonitorBounds>;
}

/// Apply `bounds` to `window`, then re-anchor if the placement left the
/// window on no monitor at all: its top-left corner moves to the fallback
/// monitor's top-left corner, the requested size stays.
///
/// Failures are logged and swallowed; the caller always reports success.
pub fn place_window<S: WindowSystem>(system: &S, window: isize, bounds: Bounds) {
    if let Err(err) = system.move_window(window, bounds) {
        log::warn!("move of window {window:#x} failed: {err}");
    }

    if system.monitor_containing(window).is_some() {
        return;
    }

    // The window was misplaced; anchor it to a monitor's top-left corner.
    match system.fallback_monitor(window) {
        Some(monitor) => {
            let anchored = Bounds {
                left: monitor.left,
                top: monitor.top,
                ..bounds
            };
            if let Err(err) = system.move_window(window, anchored) {
                log::warn!("re-anchor of window {window:#x} failed: {err}");
            }
        }
        None => log::warn!("window {window:#x} is off screen and no monitor was found"),
    }
}
