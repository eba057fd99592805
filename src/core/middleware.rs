//! 核心中间件模块

use axum::{
    extract::Request,
    http::header::{LOCATION, USER_AGENT},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;

/// 请求日志中间件
///
/// 重定向响应额外记录跳转目标，便于排查被送回目录页的请求。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let response = next.run(req).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if status.is_redirection() {
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("-");
        info!(%method, %uri, status = status.as_u16(), elapsed_ms, location, "请求被重定向");
    } else {
        info!(%method, %uri, status = status.as_u16(), elapsed_ms, ?user_agent, "请求完成");
    }

    response
}
