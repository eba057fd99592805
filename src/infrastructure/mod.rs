//! 基础设施层：日志与商品目录数据源

pub mod catalog_source;
pub mod logger;
