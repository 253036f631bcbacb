//! Win32 implementation of the window-system seam.
//!
//! Handles cross this module as raw `isize` values from the host; HWNDs are
//! rebuilt per call and never stored here.

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MonitorFromWindow, HMONITOR, MONITORINFO, MONITOR_DEFAULTTONEAREST,
    MONITOR_DEFAULTTONULL, MONITOR_DEFAULTTOPRIMARY,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetAncestor, GetWindowRect, SetWindowPos, GA_ROOT, HWND_TOP, SWP_NOSENDCHANGING,
};

use crate::errors::PlatformUtilError;
use crate::rect::Bounds;
use crate::window::{MonitorBounds, WindowSystem};

/// Direct Win32 calls, one per trait method.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32WindowSystem;

fn hwnd(handle: isize) -> HWND {
    HWND(handle as *mut core::ffi::c_void)
}

fn monitor_bounds(monitor: HMONITOR) -> Option<MonitorBounds> {
    let mut info = MONITORINFO {
        cbSize: std::mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };
    if !unsafe { GetMonitorInfoW(monitor, &mut info) }.as_bool() {
        return None;
    }
    Some(MonitorBounds {
        left: info.rcMonitor.left,
        top: info.rcMonitor.top,
        right: info.rcMonitor.right,
        bottom: info.rcMonitor.bottom,
    })
}

impl WindowSystem for Win32WindowSystem {
    fn root_window(&self, view: isize) -> isize {
        let root = unsafe { GetAncestor(hwnd(view), GA_ROOT) };
        root.0 as isize
    }

    fn window_rect(&self, window: isize) -> Result<Bounds, PlatformUtilError> {
        let mut rect = RECT::default();
        unsafe { GetWindowRect(hwnd(window), &mut rect) }?;
        Ok(Bounds {
            left: rect.left,
            top: rect.top,
            width: rect.right - rect.left,
            height: rect.bottom - rect.top,
        })
    }

    fn move_window(&self, window: isize, bounds: Bounds) -> Result<(), PlatformUtilError> {
        // SWP_NOSENDCHANGING keeps the host from reacting to its own move.
        unsafe {
            SetWindowPos(
                hwnd(window),
                HWND_TOP,
                bounds.left,
                bounds.top,
                bounds.width,
                bounds.height,
                SWP_NOSENDCHANGING,
            )
        }?;
        Ok(())
    }

    fn monitor_containing(&self, window: isize) -> Option<MonitorBounds> {
        let monitor = unsafe { MonitorFromWindow(hwnd(window), MONITOR_DEFAULTTONULL) };
        if monitor.is_invalid() {
            return None;
        }
        monitor_bounds(monitor)
    }

    fn fallback_monitor(&self, window: isize) -> Option<MonitorBounds> {
        let mut monitor = unsafe { MonitorFromWindow(hwnd(window), MONITOR_DEFAULTTONEAREST) };
        if monitor.is_invalid() {
            // There should always be a primary monitor.
            monitor = unsafe { MonitorFromWindow(hwnd(window), MONITOR_DEFAULTTOPRIMARY) };
        }
        if monitor.is_invalid() {
            return None;
        }
        monitor_bounds(monitor)
    }
}
