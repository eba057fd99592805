//! # Delicias Gelatinosas 商品详情页
//!
//! 服务端渲染单个商品的详情页：
//! - 从商品目录（JSON 文件或 HTTP 资源）加载商品列表并按 id 查找
//! - 将商品投影为页面各区域的 HTML 片段（图库、价格、描述、标签页、评论表单）
//! - 标签页、星级评分、缩略图选择等界面状态通过查询参数驱动
//! - 任何解析失败（缺少 id、商品不存在、目录加载失败）都重定向到目录页

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod utils;

pub use app::router::{build_router, AppState};
pub use config::Config;
