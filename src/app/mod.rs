//! 应用层

pub mod catalog;
pub mod page;
pub mod review;
pub mod router;

/// 商品页路径
pub const PRODUCT_PATH: &str = "/product";
/// 评论表单提交路径
pub const REVIEW_FORM_PATH: &str = "/product/reviews";
/// 评论 JSON 接口路径
pub const REVIEW_API_PATH: &str = "/api/reviews";
