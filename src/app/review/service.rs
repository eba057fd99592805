//! 评论业务服务
//!
//! 评论只做校验与记录，不落库。

use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use super::model::{Review, ReviewSubmission, DEFAULT_RATING};
use crate::core::error::CoreError;

#[derive(Clone, Default)]
pub struct ReviewService;

impl ReviewService {
    pub fn new() -> Self {
        Self
    }

    pub fn submit(&self, submission: ReviewSubmission) -> Result<Review, CoreError> {
        let submission = submission.trimmed();
        submission.validate()?;

        let review = Review {
            review_id: Uuid::new_v4(),
            product_id: submission.product_id,
            name: submission.name,
            email: submission.email,
            rating: submission.rating.unwrap_or(DEFAULT_RATING),
            text: submission.review,
            remember_me: submission.cookie,
            submitted_at: chrono::Utc::now(),
        };

        info!(
            review_id = %review.review_id,
            product_id = %review.product_id,
            rating = review.rating,
            author = %review.name,
            submitted_at = %review.submitted_at.to_rfc3339(),
            "收到新评论"
        );
        // 邮箱与正文只在 debug 级别输出
        debug!(
            review_id = %review.review_id,
            email = %review.email,
            text = %review.text,
            remember_me = review.remember_me,
            "评论详情"
        );

        Ok(review)
    }
}
