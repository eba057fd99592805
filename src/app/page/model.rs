//! 页面请求参数与视图状态

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

/// `GET /product` 的查询参数，数值参数宽松解析
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub id: Option<String>,
    pub tab: Option<String>,
    pub image: Option<String>,
    pub rating: Option<String>,
    pub notice: Option<String>,
}

impl PageQuery {
    pub fn view(&self) -> ViewState {
        ViewState {
            tab: self.tab.clone(),
            image: self.image.as_deref().and_then(|s| s.trim().parse().ok()),
            rating: self.rating.as_deref().and_then(|s| s.trim().parse().ok()),
            notice: self.notice.as_deref().and_then(Notice::from_param),
        }
    }
}

/// 请求携带的界面状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub tab: Option<String>,
    pub image: Option<usize>,
    pub rating: Option<u8>,
    pub notice: Option<Notice>,
}

/// 页面顶部的一次性提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ReviewReceived,
}

impl Notice {
    pub fn from_param(value: &str) -> Option<Notice> {
        match value {
            "review" => Some(Notice::ReviewReceived),
            _ => None,
        }
    }

    pub fn param(self) -> &'static str {
        match self {
            Notice::ReviewReceived => "review",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::ReviewReceived => {
                "¡Gracias por tu reseña! 🌟 Será publicada después de su revisión."
            }
        }
    }

    pub fn kind(self) -> &'static str {
        match self {
            Notice::ReviewReceived => "success",
        }
    }
}

/// 评论区展示的评论数与平均分
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewSummary {
    pub count: u32,
    pub average: f64,
}

impl ReviewSummary {
    /// 评论数在 10..40，平均分在 4.0..5.0
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self {
            count: rng.random_range(10..40),
            average: rng.random_range(4.0..5.0),
        }
    }

    /// 以商品 id 为种子，同一商品刷新页面数字不变
    pub fn for_product(id: &str) -> Self {
        let mut rng = StdRng::seed_from_u64(seed_for(id));
        Self::generate(&mut rng)
    }
}

/// FNV-1a 64 位散列，结果不随编译器版本变化
fn seed_for(id: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    id.bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
