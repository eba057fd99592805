//! 商品页处理器

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::warn;

use super::model::PageQuery;
use crate::app::router::AppState;

/// `GET /product?id=..`：渲染商品页，解析失败时重定向到目录页且不渲染任何片段
pub async fn show_product(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    match state.catalog.resolve(query.id.as_deref()).await {
        Ok(product) => {
            let html = state.pages.render(&product, &query.view());
            Html(html).into_response()
        }
        Err(err) => {
            warn!(error = %err, id = ?query.id, "商品解析失败，重定向到目录页");
            Redirect::to(&state.pages.site().listing_url).into_response()
        }
    }
}
