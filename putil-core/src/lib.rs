//! `putil_core` -- Pure Rust core for the `platform_util` native bridge.
//!
//! This crate contains the whole channel logic with **no FFI dependency**.
//! It can be consumed by:
//! - `putil-ffi` (C ABI DLL loaded by the host runtime shell)
//! - `putil-cli` (standalone CLI tool)
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`errors`] | `PlatformUtilError` enum via `thiserror` |
//! | [`channel`] | Method table and argument codec for the `platform_util` channel |
//! | [`rect`] | Rectangle payloads crossing the channel boundary |
//! | [`window`] | `WindowSystem` seam and the off-screen placement heuristic |
//! | [`plugin`] | `PlatformUtil` dispatcher holding the root window handle |
//! | [`win32`] | Win32 implementation of the seam (Windows only) |

pub mod channel;
pub mod errors;
pub mod plugin;
pub mod rect;
#[cfg(windows)]
pub mod win32;
pub mod window;
