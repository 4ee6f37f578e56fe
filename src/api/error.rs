use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::error::{AppError, ErrorKind};

/// HTTP 层错误，把核心错误分类映射为状态码
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Exhausted => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

/// 错误响应体
///
/// `{"success": false, "error": <状态码>, "messages": [<分类>, <详情>]}`
pub fn error_body(status: StatusCode, detail: impl Into<String>) -> serde_json::Value {
    json!({
        "success": false,
        "error": status.as_u16(),
        "messages": [label(status), detail.into()],
    })
}

fn label(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "bad request",
        404 => "not found",
        405 => "method not allowed",
        422 => "unprocessable",
        _ => "internal server error",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("请求处理失败: {}", self.0);
        }
        (status, Json(error_body(status, self.0.detail()))).into_response()
    }
}
