//! 路由与应用状态

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::catalog::service::CatalogService;
use super::page::{handler::show_product, service::PageService, shell::PageShell};
use super::review::{
    handler::{submit_review_form, submit_review_json},
    service::ReviewService,
};
use super::{PRODUCT_PATH, REVIEW_API_PATH, REVIEW_FORM_PATH};
use crate::config::Config;
use crate::core::middleware::request_logging_middleware;
use crate::core::service::CatalogSource;
use crate::infrastructure::catalog_source;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub pages: PageService,
    pub reviews: ReviewService,
}

impl AppState {
    pub fn new(source: Arc<dyn CatalogSource>, pages: PageService) -> Self {
        Self {
            catalog: CatalogService::new(source),
            pages,
            reviews: ReviewService::new(),
        }
    }

    /// 按配置组装：目录数据源与可选的自定义模板
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let source = catalog_source::from_config(&config.catalog)
            .ok_or_else(|| anyhow::anyhow!("未配置商品目录数据源"))?;

        let shell = match &config.site.template {
            Some(path) => {
                let template = std::fs::read_to_string(path).map_err(|e| {
                    anyhow::anyhow!("无法读取页面模板 {}: {}", path.display(), e)
                })?;
                PageShell::from_template(template)
            }
            None => PageShell::standard(),
        };

        Ok(Self::new(source, PageService::new(shell, config.site.clone())))
    }
}

pub fn build_router(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route(PRODUCT_PATH, get(show_product))
        .route(REVIEW_FORM_PATH, post(submit_review_form))
        .route(REVIEW_API_PATH, post(submit_review_json))
        .route("/health", get(health_check))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": state.catalog.source().describe(),
        "anchors": state.pages.shell().anchors().count(),
    }))
}
