//! 页面界面状态：标签页、星级评分、图库选择

use crate::app::catalog::model::ProductImages;

use super::shell::Anchor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Description,
    Information,
    Reviews,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Description, Tab::Information, Tab::Reviews];

    /// 按钮的 `data-id` 与内容面板的 `id`
    pub fn id(self) -> &'static str {
        match self {
            Tab::Description => "desc",
            Tab::Information => "info",
            Tab::Reviews => "reviews",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Description => "Descripción",
            Tab::Information => "Información adicional",
            Tab::Reviews => "Reseñas",
        }
    }

    pub fn anchor(self) -> Anchor {
        match self {
            Tab::Description => Anchor::TabDesc,
            Tab::Information => Anchor::TabInfo,
            Tab::Reviews => Anchor::TabReviews,
        }
    }
}

/// 固定标签集合，任意时刻至多一个处于激活状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSet {
    active: Option<Tab>,
}

impl TabSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 激活指定标签，其余标签全部失活
    pub fn activate(&mut self, tab: Tab) {
        self.active = Some(tab);
    }

    /// 按 id 激活；未知 id 不改变状态
    pub fn activate_id(&mut self, id: &str) -> bool {
        match Tab::from_id(id) {
            Some(tab) => {
                self.activate(tab);
                true
            }
            None => false,
        }
    }

    /// 没有激活标签时激活第一个
    pub fn ensure_default(&mut self) {
        if self.active.is_none() {
            self.active = Some(Tab::ALL[0]);
        }
    }

    pub fn active(&self) -> Option<Tab> {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == Some(tab)
    }
}

pub const MAX_RATING: u8 = 5;

/// 星级评分选择，至多一个值
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarRating {
    selected: Option<u8>,
}

impl StarRating {
    /// 选择新的评分，超出 1..=5 的值被忽略
    pub fn select(&mut self, rating: u8) -> bool {
        if (1..=MAX_RATING).contains(&rating) {
            self.selected = Some(rating);
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    pub fn is_active(&self, rating: u8) -> bool {
        self.selected == Some(rating)
    }
}

/// 图库：主图加缩略图，选中缩略图即成为主图
#[derive(Debug, Clone)]
pub struct Gallery<'p> {
    images: &'p ProductImages,
    selected: Option<usize>,
}

impl<'p> Gallery<'p> {
    pub fn new(images: &'p ProductImages) -> Self {
        Self {
            images,
            selected: None,
        }
    }

    /// 越界的下标被忽略
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.images.thumbs.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn primary(&self) -> &'p str {
        match self.selected {
            Some(index) => &self.images.thumbs[index],
            None => &self.images.single_image,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn thumbs(&self) -> &'p [String] {
        &self.images.thumbs
    }
}
