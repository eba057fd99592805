//! 评论处理器

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    response::{Json, Redirect},
    Form,
};

use super::model::{ReviewReceipt, ReviewSubmission};
use crate::app::page::model::Notice;
use crate::app::page::state::Tab;
use crate::app::router::AppState;
use crate::app::PRODUCT_PATH;
use crate::core::{error::CoreError, response::ApiResponse};
use crate::utils::page_href;

/// `POST /product/reviews`：表单提交，成功后回到商品页的评论标签并显示提示
pub async fn submit_review_form(
    State(state): State<AppState>,
    submission: Result<Form<ReviewSubmission>, FormRejection>,
) -> Result<Redirect, CoreError> {
    let Form(submission) = submission?;
    let review = state.reviews.submit(submission)?;

    let target = page_href(
        PRODUCT_PATH,
        &[
            ("id", review.product_id),
            ("tab", Tab::Reviews.id().to_string()),
            ("notice", Notice::ReviewReceived.param().to_string()),
        ],
    );
    Ok(Redirect::to(&target))
}

/// `POST /api/reviews`：JSON 提交，返回回执
pub async fn submit_review_json(
    State(state): State<AppState>,
    submission: Result<Json<ReviewSubmission>, JsonRejection>,
) -> Result<Json<ApiResponse<ReviewReceipt>>, CoreError> {
    let Json(submission) = submission?;
    let review = state.reviews.submit(submission)?;
    Ok(Json(ApiResponse::success(
        ReviewReceipt::from(&review),
        Notice::ReviewReceived.message(),
    )))
}
