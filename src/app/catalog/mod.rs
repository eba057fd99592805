//! 商品目录：数据模型与按 id 解析

pub mod model;
pub mod service;
