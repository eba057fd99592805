//! 评论提交：校验、记录并确认，不做持久化

pub mod handler;
pub mod model;
pub mod service;
