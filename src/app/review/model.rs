//! 评论数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 没有选择星级时的默认评分
pub const DEFAULT_RATING: u8 = 5;

/// 评论表单提交内容（表单与 JSON 共用）
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewSubmission {
    #[validate(length(min = 1, max = 64, message = "商品 id 不能为空"))]
    pub product_id: String,
    #[validate(length(min = 1, max = 120, message = "姓名不能为空"))]
    pub name: String,
    #[validate(email(message = "请提供有效的邮箱地址"))]
    pub email: String,
    #[validate(range(min = 1, max = 5, message = "评分必须在 1 到 5 之间"))]
    #[serde(default)]
    pub rating: Option<u8>,
    #[validate(length(min = 1, max = 5000, message = "评论内容不能为空"))]
    pub review: String,
    #[serde(default, deserialize_with = "checkbox")]
    pub cookie: bool,
}

impl ReviewSubmission {
    /// 去掉首尾空白，避免只含空格的字段通过校验
    pub fn trimmed(self) -> Self {
        Self {
            product_id: self.product_id.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            rating: self.rating,
            review: self.review.trim().to_string(),
            cookie: self.cookie,
        }
    }
}

// 表单复选框提交 "on"，JSON 提交布尔值
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Checkbox {
        Flag(bool),
        Text(String),
    }

    Ok(match Checkbox::deserialize(deserializer)? {
        Checkbox::Flag(flag) => flag,
        Checkbox::Text(text) => matches!(text.as_str(), "on" | "true" | "1"),
    })
}

/// 一条评论，只存在于本次请求中
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub review_id: Uuid,
    pub product_id: String,
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub text: String,
    pub remember_me: bool,
    pub submitted_at: DateTime<Utc>,
}

/// 提交成功后返回给调用方的回执
#[derive(Debug, Clone, Serialize)]
pub struct ReviewReceipt {
    pub review_id: Uuid,
    pub product_id: String,
    pub rating: u8,
    pub submitted_at: DateTime<Utc>,
}

impl From<&Review> for ReviewReceipt {
    fn from(review: &Review) -> Self {
        Self {
            review_id: review.review_id,
            product_id: review.product_id.clone(),
            rating: review.rating,
            submitted_at: review.submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_accepts_form_and_json() {
        let json: ReviewSubmission = serde_json::from_str(
            r#"{"product_id": "7", "name": "Ana", "email": "ana@example.com", "review": "Rica", "cookie": true}"#,
        )
        .unwrap();
        assert!(json.cookie);
        assert_eq!(json.rating, None);

        let text: ReviewSubmission = serde_json::from_str(
            r#"{"product_id": "7", "name": "Ana", "email": "ana@example.com", "review": "Rica", "cookie": "on"}"#,
        )
        .unwrap();
        assert!(text.cookie);
    }

    #[test]
    fn test_validation() {
        let valid = ReviewSubmission {
            product_id: "7".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            rating: Some(4),
            review: "Muy rica".to_string(),
            cookie: false,
        };
        assert!(valid.validate().is_ok());

        let bad_email = ReviewSubmission {
            email: "ana".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let bad_rating = ReviewSubmission {
            rating: Some(9),
            ..valid.clone()
        };
        assert!(bad_rating.validate().is_err());

        let blank_name = ReviewSubmission {
            name: "   ".to_string(),
            ..valid
        }
        .trimmed();
        assert!(blank_name.validate().is_err());
    }
}
