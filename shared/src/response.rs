//! API Response types
//!
//! The roster backend wraps every reply in the same envelope.

use serde::{Deserialize, Serialize};

/// The only response code treated as success
pub const SUCCESS_CODE: i32 = 200;

/// Unified API response structure
///
/// All backend responses follow this format:
/// ```json
/// {
///     "code": 200,
///     "message": "获取成功",
///     "data": { ... }
/// }
/// ```
///
/// Error envelopes (401/403/404/500) carry only `code` and `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (200 = success, others = error)
    pub code: i32,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Response data (optional); a missing field reads as `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// `code == 200`
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Id payload returned by add/update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_envelope() {
        let json = r#"{"code":200,"message":"获取成功","data":[1,2,3]}"#;
        let resp: ApiResponse<Vec<i32>> = serde_json::from_str(json).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.message, "获取成功");
        assert_eq!(resp.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_decode_error_envelope_without_data() {
        let json = r#"{"code":401,"message":"用户名或密码错误"}"#;
        let resp: ApiResponse<CreatedId> = serde_json::from_str(json).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.code, 401);
        assert!(resp.data.is_none());
    }

    fn decode<T: serde::de::DeserializeOwned>(json: &str) -> ApiResponse<T> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_decode_generic_payload_without_default() {
        // payload types need not implement Default
        let resp: ApiResponse<CreatedId> = decode(r#"{"code":200,"message":"ok","data":{"id":9}}"#);
        assert_eq!(resp.data, Some(CreatedId { id: 9 }));

        let resp: ApiResponse<CreatedId> = decode(r#"{"code":403,"message":"forbidden"}"#);
        assert_eq!(resp.data, None);
    }

    #[test]
    fn test_decode_without_message() {
        let json = r#"{"code":500}"#;
        let resp: ApiResponse<()> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.code, 500);
        assert!(resp.message.is_empty());
    }

    #[test]
    fn test_error_serialization_omits_data() {
        let resp = ApiResponse::<CreatedId>::error(404, "员工不存在");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["code"], 404);
        assert!(value.get("data").is_none());
    }
}
