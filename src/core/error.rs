//! 核心错误处理模块

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// 核心错误类型（JSON 接口使用）
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error_message, user_message) = match self {
            CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, axum::Json(error_response)).into_response()
    }
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::BadRequest(format!("评论数据无效: {}", errors))
    }
}

impl From<FormRejection> for CoreError {
    fn from(rejection: FormRejection) -> Self {
        CoreError::BadRequest(format!("表单数据无效: {}", rejection.body_text()))
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(format!("JSON 数据无效: {}", rejection.body_text()))
    }
}

/// 商品解析失败。三种情况的处理方式相同：重定向到目录页
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("请求中缺少商品 id")]
    MissingId,
    #[error("商品不存在: {0}")]
    NotFound(String),
    #[error("商品目录不可用: {0}")]
    CatalogUnavailable(String),
}

/// 商品目录加载错误
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("目录文件读取失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("目录请求失败: {0}")]
    Http(#[from] reqwest::Error),
    #[error("目录服务返回状态码 {0}")]
    Status(u16),
    #[error("目录解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<CatalogError> for ResolutionError {
    fn from(err: CatalogError) -> Self {
        ResolutionError::CatalogUnavailable(err.to_string())
    }
}
