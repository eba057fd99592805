//! 商品目录数据源实现

use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Client;
use tracing::debug;

use crate::app::catalog::model::Product;
use crate::config::CatalogConfig;
use crate::core::error::CatalogError;
use crate::core::service::CatalogSource;

/// 本地 JSON 目录文件
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Vec<Product>, CatalogError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let products: Vec<Product> = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), count = products.len(), "目录文件已加载");
        Ok(products)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// 通过 HTTP 获取的 JSON 目录
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalog {
    async fn load(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let bytes = response.bytes().await?;
        let products: Vec<Product> = serde_json::from_slice(&bytes)?;
        debug!(url = %self.url, count = products.len(), "远程目录已加载");
        Ok(products)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// 内存中的固定目录
#[derive(Clone, Default)]
pub struct StaticCatalog {
    products: Arc<Vec<Product>>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }
}

#[async_trait::async_trait]
impl CatalogSource for StaticCatalog {
    async fn load(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.as_ref().clone())
    }

    fn describe(&self) -> String {
        format!("memory:{} products", self.products.len())
    }
}

/// 按配置选择数据源，`url` 优先
pub fn from_config(config: &CatalogConfig) -> Option<Arc<dyn CatalogSource>> {
    if let Some(url) = &config.url {
        return Some(Arc::new(HttpCatalog::new(url.clone())));
    }
    config
        .path
        .as_ref()
        .map(|path| Arc::new(JsonFileCatalog::new(path.clone())) as Arc<dyn CatalogSource>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use std::fs;
    use tempfile::tempdir;

    /// 在随机端口上启动目录服务，返回基础地址
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn catalog_router() -> Router {
        Router::new()
            .route(
                "/data.json",
                get(|| async { r#"[{"id": 7, "name": "Mini Flan", "price": {"newPrice": 25}}]"# }),
            )
            .route(
                "/down.json",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route("/broken.json", get(|| async { "<html>no es json</html>" }))
    }

    fn local_catalog(base: &str, path: &str) -> HttpCatalog {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpCatalog::with_client(client, format!("{}{}", base, path))
    }

    #[tokio::test]
    async fn test_json_file_catalog_loads_products() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"[{"id": 1, "name": "Flan", "price": {"newPrice": 12.5}},
                {"id": "x-2", "name": "Copa", "price": {"newPrice": 30}}]"#,
        )
        .unwrap();

        let products = JsonFileCatalog::new(&path).load().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "Copa");
    }

    #[tokio::test]
    async fn test_json_file_catalog_errors() {
        let dir = tempdir().unwrap();

        let missing = JsonFileCatalog::new(dir.path().join("missing.json"));
        assert!(matches!(missing.load().await, Err(CatalogError::Io(_))));

        let path = dir.path().join("broken.json");
        fs::write(&path, r#"[{"id": 1, "name": "Sin precio"}]"#).unwrap();
        let broken = JsonFileCatalog::new(&path);
        assert!(matches!(broken.load().await, Err(CatalogError::Parse(_))));
    }

    #[tokio::test]
    async fn test_http_catalog_loads_products() {
        let base = serve(catalog_router()).await;

        let products = local_catalog(&base, "/data.json").load().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Mini Flan");
        assert!(products[0].id.matches("7"));
    }

    #[tokio::test]
    async fn test_http_catalog_errors() {
        let base = serve(catalog_router()).await;

        let down = local_catalog(&base, "/down.json").load().await;
        assert!(matches!(down, Err(CatalogError::Status(500))));

        let broken = local_catalog(&base, "/broken.json").load().await;
        assert!(matches!(broken, Err(CatalogError::Parse(_))));

        let missing = local_catalog(&base, "/nada.json").load().await;
        assert!(matches!(missing, Err(CatalogError::Status(404))));
    }

    #[test]
    fn test_from_config_prefers_url() {
        let config = CatalogConfig {
            path: Some(PathBuf::from("data/catalog.json")),
            url: Some("http://localhost:9/data.json".to_string()),
        };
        let source = from_config(&config).unwrap();
        assert_eq!(source.describe(), "http://localhost:9/data.json");

        let config = CatalogConfig {
            path: None,
            url: None,
        };
        assert!(from_config(&config).is_none());
    }
}
