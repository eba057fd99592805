//! 核心服务层模块

use crate::app::catalog::model::Product;
use crate::core::error::CatalogError;

/// 商品目录数据源
///
/// 每次页面请求加载一次完整目录，不做跨请求缓存。
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Product>, CatalogError>;

    /// 日志中使用的数据源描述
    fn describe(&self) -> String;
}
