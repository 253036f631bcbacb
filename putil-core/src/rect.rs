//! Rectangle types crossing the channel boundary.
//!
//! The channel exchanges rectangles as string-keyed mappings of `f64`
//! values; the window system works in integer screen coordinates.  Both
//! shapes live here, along with the one conversion between them.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Window bounds in integer screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// Wire shape of a `getWindowRect` response: four float fields.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RectPayload {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Bounds> for RectPayload {
    fn from(b: Bounds) -> Self {
        Self {
            left: f64::from(b.left),
            top: f64::from(b.top),
            width: f64::from(b.width),
            height: f64::from(b.height),
        }
    }
}

impl RectPayload {
    /// Encode as the wire mapping `{left, top, width, height}`.
    pub fn to_value(&self) -> Value {
        json!({
            "left": self.left,
            "top": self.top,
            "width": self.width,
            "height": self.height,
        })
    }
}

/// Arguments of `setWindowRect`, with defaults resolved once at the
/// boundary: any absent key reads as `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SetRectArgs {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SetRectArgs {
    /// Decode from the raw argument mapping.
    ///
    /// A payload that is not a mapping of numbers decodes as the all-zero
    /// default; the decode failure is logged, not surfaced.
    pub fn from_args(args: &Value) -> Self {
        serde_json::from_value(args.clone()).unwrap_or_else(|err| {
            log::warn!("setWindowRect: undecodable arguments ({err}), using defaults");
            Self::default()
        })
    }

    /// Truncate to integer screen coordinates (cast toward zero).
    pub fn to_bounds(self) -> Bounds {
        Bounds {
            left: self.x as i32,
            top: self.y as i32,
            width: self.width as i32,
            height: self.height as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_args_all_keys() {
        let args = SetRectArgs::from_args(&json!({
            "x": 10.0, "y": 20.0, "width": 300.0, "height": 200.0
        }));
        assert_eq!(
            args,
            SetRectArgs { x: 10.0, y: 20.0, width: 300.0, height: 200.0 }
        );
    }

    #[test]
    fn test_set_args_missing_keys_default_to_zero() {
        let args = SetRectArgs::from_args(&json!({ "x": 42.0 }));
        assert_eq!(args.x, 42.0);
        assert_eq!(args.y, 0.0);
        assert_eq!(args.width, 0.0);
        assert_eq!(args.height, 0.0);

        let empty = SetRectArgs::from_args(&json!({}));
        assert_eq!(empty, SetRectArgs::default());
    }

    #[test]
    fn test_set_args_undecodable_payload_defaults() {
        assert_eq!(SetRectArgs::from_args(&json!("rect")), SetRectArgs::default());
        assert_eq!(
            SetRectArgs::from_args(&json!({ "x": "ten" })),
            SetRectArgs::default()
        );
    }

    #[test]
    fn test_to_bounds_truncates_toward_zero() {
        let b = SetRectArgs { x: 10.9, y: -3.7, width: 300.2, height: 199.9 }.to_bounds();
        assert_eq!(b, Bounds { left: 10, top: -3, width: 300, height: 199 });
    }

    #[test]
    fn test_rect_payload_wire_shape() {
        let payload = RectPayload::from(Bounds { left: 1, top: 2, width: 3, height: 4 });
        let value = payload.to_value();
        assert_eq!(value["left"], json!(1.0));
        assert_eq!(value["top"], json!(2.0));
        assert_eq!(value["width"], json!(3.0));
        assert_eq!(value["height"], json!(4.0));
        assert_eq!(value.as_object().map(|m| m.len()), Some(4));
    }
}
