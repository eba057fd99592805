//! 商品目录业务服务

use std::sync::Arc;

use tracing::debug;

use super::model::Product;
use crate::core::error::ResolutionError;
use crate::core::service::CatalogSource;

/// 在目录中按 id 查找，返回第一个匹配项
pub fn find_by_id<'a>(products: &'a [Product], raw: &str) -> Option<&'a Product> {
    products.iter().find(|product| product.id.matches(raw))
}

#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// 把查询参数中的 id 解析为商品
    pub async fn resolve(&self, raw: Option<&str>) -> Result<Product, ResolutionError> {
        let raw = raw
            .filter(|id| !id.trim().is_empty())
            .ok_or(ResolutionError::MissingId)?;

        let products = self.source.load().await?;
        debug!(source = %self.source.describe(), count = products.len(), "目录已加载");

        find_by_id(&products, raw)
            .cloned()
            .ok_or_else(|| ResolutionError::NotFound(raw.to_string()))
    }

    pub fn source(&self) -> &dyn CatalogSource {
        self.source.as_ref()
    }
}
