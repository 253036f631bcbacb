//! C ABI DLL for the `platform_util` bridge -- loadable by the host runtime
//! shell or any FFI consumer.
//!
//! All exported functions follow the convention:
//! - Return `i32` status code: `PUTIL_OK=0`, `PUTIL_NOT_IMPLEMENTED=1`,
//!   `PUTIL_ERROR=-1`
//! - Payloads are JSON strings allocated by Rust, freed via
//!   `putil_free_string()`
//! - Last error retrievable via `putil_last_error()`
//!
//! `PUTIL_ERROR` only ever means a codec failure at this boundary; the
//! dispatcher itself answers every recognised method.

use std::cell::RefCell;
use std::ffi::{c_char, CStr, CString};
use std::ptr;

pub const PUTIL_OK: i32 = 0;
pub const PUTIL_NOT_IMPLEMENTED: i32 = 1;
pub const PUTIL_ERROR: i32 = -1;

const CHANNEL_NAME_C: &CStr = c"platform_util";

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Name of the method channel this library serves.
///
/// Returns a pointer to a static string; do not free it.
#[no_mangle]
pub extern "C" fn putil_channel_name() -> *const c_char {
    CHANNEL_NAME_C.as_ptr()
}

/// Retrieve the last error message (thread-local).
///
/// Returns a pointer valid until the next putil_* call on this thread.
/// Returns null if no error has occurred.
#[no_mangle]
pub extern "C" fn putil_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        e.borrow()
            .as_ref()
            .map(|s| s.as_ptr())
            .unwrap_or(ptr::null())
    })
}

/// Free a string previously allocated by a putil_* function.
///
/// # Safety
///
/// `ptr` must be a pointer returned by a putil_* function or null.
#[no_mangle]
pub unsafe extern "C" fn putil_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Opaque plugin instance exported to the host.
#[cfg(windows)]
pub struct PutilPlugin(
    putil_core::plugin::PlatformUtil<putil_core::win32::Win32WindowSystem>,
);

/// Create a plugin instance bound to the host's view window.
///
/// The root window handle is resolved later, by the `init` method call.
/// Returns an owned pointer; release with `putil_plugin_free()`.
#[cfg(windows)]
#[no_mangle]
pub extern "C" fn putil_plugin_new(view_hwnd: isize) -> *mut PutilPlugin {
    let plugin = putil_core::plugin::PlatformUtil::new(
        putil_core::win32::Win32WindowSystem,
        view_hwnd,
    );
    Box::into_raw(Box::new(PutilPlugin(plugin)))
}

/// Destroy a plugin instance.
///
/// # Safety
///
/// `plugin` must be a pointer returned by `putil_plugin_new()` or null, and
/// must not be used afterwards.
#[cfg(windows)]
#[no_mangle]
pub unsafe extern "C" fn putil_plugin_free(plugin: *mut PutilPlugin) {
    if !plugin.is_null() {
        drop(unsafe { Box::from_raw(plugin) });
    }
}

/// Dispatch one method call on the channel.
///
/// `method` is the wire method name; `args_json` is the JSON-encoded
/// argument mapping (null reads as `{}`).  On `PUTIL_OK`, `*out_json`
/// receives the JSON-encoded success payload; free it with
/// `putil_free_string()`.  On `PUTIL_NOT_IMPLEMENTED`, `*out_json` is left
/// untouched.
///
/// # Safety
///
/// `plugin` must come from `putil_plugin_new()`; `method` and (if non-null)
/// `args_json` must be valid null-terminated UTF-8 C strings; `out_json`
/// must be a valid pointer to a `*mut c_char`.
#[cfg(windows)]
#[no_mangle]
pub unsafe extern "C" fn putil_plugin_handle(
    plugin: *mut PutilPlugin,
    method: *const c_char,
    args_json: *const c_char,
    out_json: *mut *mut c_char,
) -> i32 {
    use putil_core::channel::{self, MethodResponse};

    if plugin.is_null() || method.is_null() || out_json.is_null() {
        set_last_error("null pointer argument");
        return PUTIL_ERROR;
    }

    let method = match unsafe { CStr::from_ptr(method) }.to_str() {
        Ok(s) => s,
        Err(e) => {
            set_last_error(&format!("Invalid UTF-8 method name: {e}"));
            return PUTIL_ERROR;
        }
    };

    let raw_args = if args_json.is_null() {
        None
    } else {
        match unsafe { CStr::from_ptr(args_json) }.to_str() {
            Ok(s) => Some(s),
            Err(e) => {
                set_last_error(&format!("Invalid UTF-8 arguments: {e}"));
                return PUTIL_ERROR;
            }
        }
    };

    let args = match channel::decode_args(raw_args) {
        Ok(args) => args,
        Err(e) => {
            set_last_error(&e.to_string());
            return PUTIL_ERROR;
        }
    };

    let plugin = unsafe { &mut *plugin };
    match plugin.0.handle_call(method, &args) {
        MethodResponse::NotImplemented => PUTIL_NOT_IMPLEMENTED,
        MethodResponse::Success(payload) => match channel::encode_payload(&payload) {
            Ok(json) => match CString::new(json) {
                Ok(cstr) => {
                    unsafe { *out_json = cstr.into_raw() };
                    PUTIL_OK
                }
                Err(e) => {
                    set_last_error(&format!("CString conversion failed: {e}"));
                    PUTIL_ERROR
                }
            },
            Err(e) => {
                set_last_error(&e.to_string());
                PUTIL_ERROR
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_name_matches_core() {
        assert_eq!(
            CHANNEL_NAME_C.to_str().unwrap(),
            putil_core::channel::CHANNEL_NAME
        );
    }
}
