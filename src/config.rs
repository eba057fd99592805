use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "STOREFRONT_CONFIG";

/// 店铺服务配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 商品目录配置
    pub catalog: CatalogConfig,
    /// 站点文案与链接配置
    pub site: SiteConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒），包含目录加载
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 商品目录配置，`url` 优先于 `path`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// 本地 JSON 目录文件
    pub path: Option<PathBuf>,
    /// 远程 JSON 目录地址
    pub url: Option<String>,
}

/// 站点配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// 页面标题中的店铺名
    pub brand: String,
    /// 解析失败时跳转的目录页
    pub listing_url: String,
    /// 面包屑中的首页链接
    pub home_url: String,
    /// SKU 前缀
    pub sku_prefix: String,
    /// 价格前的货币符号
    pub currency: String,
    /// 自定义页面模板（包含 `{{anchor}}` 标记）
    pub template: Option<PathBuf>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            timeout_seconds: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: Some(PathBuf::from("data/catalog.json")),
            url: None,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Delicias Gelatinosas".to_string(),
            listing_url: "shop.html".to_string(),
            home_url: "index.html".to_string(),
            sku_prefix: "GEL-".to_string(),
            currency: "Bs.".to_string(),
            template: None,
        }
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// 从 TOML 文本解析配置
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }

        if self.catalog.path.is_none() && self.catalog.url.is_none() {
            return Err(ConfigError::Validation(
                "必须配置商品目录的 path 或 url".to_string(),
            ));
        }

        if self.site.listing_url.trim().is_empty() {
            return Err(ConfigError::Validation("目录页地址不能为空".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 查找配置文件：环境变量优先，其次是约定路径
pub fn locate_config_file() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    ["config.toml", "./config/config.toml"]
        .into_iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// 从文件或默认值加载配置
pub fn load_config() -> Result<Config, ConfigError> {
    match locate_config_file() {
        Some(path) => Config::load_from_file(path),
        None => Ok(Config::default()),
    }
}
