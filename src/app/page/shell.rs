//! 页面骨架与锚点
//!
//! 模板中的 `{{anchor-name}}` 标记即锚点。渲染器只向模板中存在的锚点写入片段，
//! 写入缺失的锚点是无操作。

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

/// 页面中可写入片段的区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Anchor {
    DocumentTitle,
    Notification,
    Breadcrumb,
    MainImage,
    GalleryThumbs,
    ProductTitle,
    NewPrice,
    OldPrice,
    Discount,
    Description,
    Sku,
    Categories,
    Tags,
    TabButtons,
    TabDesc,
    TabInfo,
    TabReviews,
}

impl Anchor {
    pub const ALL: [Anchor; 17] = [
        Anchor::DocumentTitle,
        Anchor::Notification,
        Anchor::Breadcrumb,
        Anchor::MainImage,
        Anchor::GalleryThumbs,
        Anchor::ProductTitle,
        Anchor::NewPrice,
        Anchor::OldPrice,
        Anchor::Discount,
        Anchor::Description,
        Anchor::Sku,
        Anchor::Categories,
        Anchor::Tags,
        Anchor::TabButtons,
        Anchor::TabDesc,
        Anchor::TabInfo,
        Anchor::TabReviews,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Anchor::DocumentTitle => "document-title",
            Anchor::Notification => "notification",
            Anchor::Breadcrumb => "breadcrumb",
            Anchor::MainImage => "main-image",
            Anchor::GalleryThumbs => "gallery-thumbs",
            Anchor::ProductTitle => "product-title",
            Anchor::NewPrice => "new-price",
            Anchor::OldPrice => "old-price",
            Anchor::Discount => "product-discount",
            Anchor::Description => "product-description",
            Anchor::Sku => "product-sku",
            Anchor::Categories => "product-categories",
            Anchor::Tags => "product-tags",
            Anchor::TabButtons => "tab-buttons",
            Anchor::TabDesc => "tab-desc",
            Anchor::TabInfo => "tab-info",
            Anchor::TabReviews => "tab-reviews",
        }
    }

    pub fn from_name(name: &str) -> Option<Anchor> {
        Anchor::ALL.into_iter().find(|anchor| anchor.name() == name)
    }
}

/// 模板文本中的一段：普通文本或锚点标记
enum Segment<'t> {
    Text(&'t str),
    Marker(Anchor),
}

fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(len) = after.find("}}") else { break };

        match Anchor::from_name(after[..len].trim()) {
            Some(anchor) => {
                out.push(Segment::Text(&rest[..start]));
                out.push(Segment::Marker(anchor));
            }
            // 未知标记原样保留
            None => out.push(Segment::Text(&rest[..start + 2 + len + 2])),
        }
        rest = &after[len + 2..];
    }
    out.push(Segment::Text(rest));
    out
}

/// 页面骨架：模板文本及其提供的锚点
#[derive(Debug, Clone)]
pub struct PageShell {
    template: String,
    anchors: BTreeSet<Anchor>,
}

impl PageShell {
    /// 包含全部锚点的默认商品页
    pub fn standard() -> Self {
        Self::from_template(STANDARD_TEMPLATE)
    }

    pub fn from_template(template: impl Into<String>) -> Self {
        let template = template.into();
        let anchors = segments(&template)
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Marker(anchor) => Some(anchor),
                Segment::Text(_) => None,
            })
            .collect();
        Self { template, anchors }
    }

    pub fn has(&self, anchor: Anchor) -> bool {
        self.anchors.contains(&anchor)
    }

    pub fn anchors(&self) -> impl Iterator<Item = Anchor> + '_ {
        self.anchors.iter().copied()
    }
}

impl Default for PageShell {
    fn default() -> Self {
        Self::standard()
    }
}

/// 一次渲染中的页面：骨架加上已写入的片段
pub struct Page<'s> {
    shell: &'s PageShell,
    fragments: BTreeMap<Anchor, String>,
}

impl<'s> Page<'s> {
    pub fn new(shell: &'s PageShell) -> Self {
        Self {
            shell,
            fragments: BTreeMap::new(),
        }
    }

    /// 锚点存在时才生成并写入片段，返回是否写入
    pub fn fill<F>(&mut self, anchor: Anchor, render: F) -> bool
    where
        F: FnOnce() -> String,
    {
        if !self.shell.has(anchor) {
            debug!(anchor = anchor.name(), "页面没有该锚点，跳过");
            return false;
        }
        self.fragments.insert(anchor, render());
        true
    }

    pub fn fragment(&self, anchor: Anchor) -> Option<&str> {
        self.fragments.get(&anchor).map(String::as_str)
    }

    /// 单遍替换标记，片段中的文本不会被再次解释为标记
    pub fn into_html(self) -> String {
        let mut html = String::with_capacity(self.shell.template.len() * 2);
        for segment in segments(&self.shell.template) {
            match segment {
                Segment::Text(text) => html.push_str(text),
                Segment::Marker(anchor) => {
                    if let Some(fragment) = self.fragments.get(&anchor) {
                        html.push_str(fragment);
                    }
                }
            }
        }
        html
    }
}

pub const STANDARD_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{document-title}}</title>
    <link rel="stylesheet" href="css/main.css">
</head>
<body>
    {{notification}}
    <section class="single-product">
        <div class="container">
            <nav class="breadcrumb">{{breadcrumb}}</nav>
            <div class="single-content">
                <div class="product-gallery">
                    <div class="single-image-wrapper">{{main-image}}</div>
                    <div class="product-thumb">{{gallery-thumbs}}</div>
                </div>
                <div class="product-info">
                    {{product-title}}
                    <div class="product-price">
                        {{new-price}}
                        {{old-price}}
                        {{product-discount}}
                    </div>
                    {{product-description}}
                    <div class="product-meta">
                        {{product-sku}}
                        {{product-categories}}
                        {{product-tags}}
                    </div>
                </div>
            </div>
            <div class="single-tabs">
                <ul class="tab-list">{{tab-buttons}}</ul>
                <div class="tab-panel">
                    {{tab-desc}}
                    {{tab-info}}
                    {{tab-reviews}}
                </div>
            </div>
        </div>
    </section>
</body>
</html>
"#;
