//! Method table and argument codec for the `platform_util` channel.
//!
//! The channel carries one synchronous request/response per call: a method
//! name plus a string-keyed argument mapping in, a success payload or a
//! not-implemented signal out.  Method names are parsed in exactly one
//! place, into [`Method`].

use serde_json::{Map, Value};

use crate::errors::PlatformUtilError;

/// Name of the method channel this plugin binds to.
pub const CHANNEL_NAME: &str = "platform_util";

/// The operations the channel recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Resolve and store the host's root window handle.
    Init,
    /// Query the stored window's bounding rectangle.
    GetWindowRect,
    /// Reposition/resize the stored window.
    SetWindowRect,
}

impl Method {
    /// Parse a wire method name.  Unknown names answer `None`, which the
    /// dispatcher turns into [`MethodResponse::NotImplemented`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "init" => Some(Self::Init),
            "getWindowRect" => Some(Self::GetWindowRect),
            "setWindowRect" => Some(Self::SetWindowRect),
            _ => None,
        }
    }

    /// Wire name of the method.
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::GetWindowRect => "getWindowRect",
            Self::SetWindowRect => "setWindowRect",
        }
    }
}

/// Outcome of one method call.
///
/// Every path returns a value; nothing unwinds across the channel.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    /// Encoded success payload (a boolean or a rect mapping).
    Success(Value),
    /// The method name is not part of the channel vocabulary.
    NotImplemented,
}

/// Decode a raw JSON argument payload.  An absent payload decodes to the
/// empty mapping.
pub fn decode_args(raw: Option<&str>) -> Result<Value, PlatformUtilError> {
    match raw {
        None => Ok(Value::Object(Map::new())),
        Some(raw) => serde_json::from_str(raw).map_err(PlatformUtilError::from),
    }
}

/// Encode a success payload for the wire.
pub fn encode_payload(payload: &Value) -> Result<String, PlatformUtilError> {
    serde_json::to_string(payload).map_err(PlatformUtilError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_from_name_known() {
        assert_eq!(Method::from_name("init"), Some(Method::Init));
        assert_eq!(Method::from_name("getWindowRect"), Some(Method::GetWindowRect));
        assert_eq!(Method::from_name("setWindowRect"), Some(Method::SetWindowRect));
    }

    #[test]
    fn test_method_from_name_unknown() {
        assert_eq!(Method::from_name("getPlatformVersion"), None);
        assert_eq!(Method::from_name("GETWINDOWRECT"), None);
        assert_eq!(Method::from_name(""), None);
    }

    #[test]
    fn test_method_name_round_trip() {
        for m in [Method::Init, Method::GetWindowRect, Method::SetWindowRect] {
            assert_eq!(Method::from_name(m.name()), Some(m));
        }
    }

    #[test]
    fn test_decode_args_absent_is_empty_mapping() {
        let args = decode_args(None).unwrap();
        assert_eq!(args, json!({}));
    }

    #[test]
    fn test_decode_args_malformed_is_codec_error() {
        let err = decode_args(Some("{oops")).unwrap_err();
        assert!(err.to_string().starts_with("CodecError:"));
    }

    #[test]
    fn test_encode_payload() {
        assert_eq!(encode_payload(&json!(true)).unwrap(), "true");
    }
}
