use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform `{success, message, data}` envelope returned by every route.
///
/// Failure responses may also carry `errors` with field-level detail; the key
/// is omitted entirely on success.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            errors: None,
        }
    }

    pub fn error(message: String, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message,
            data: None,
            errors,
        }
    }
}
