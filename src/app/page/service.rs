//! 商品页渲染服务

use std::sync::Arc;

use tracing::debug;

use super::fragments::{self, RenderContext};
use super::model::{ReviewSummary, ViewState};
use super::shell::{Anchor, Page, PageShell};
use super::state::{Gallery, StarRating, Tab, TabSet};
use crate::app::catalog::model::Product;
use crate::config::SiteConfig;

#[derive(Clone)]
pub struct PageService {
    shell: Arc<PageShell>,
    site: Arc<SiteConfig>,
}

impl PageService {
    pub fn new(shell: PageShell, site: SiteConfig) -> Self {
        Self {
            shell: Arc::new(shell),
            site: Arc::new(site),
        }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn shell(&self) -> &PageShell {
        &self.shell
    }

    /// 渲染完整页面
    pub fn render(&self, product: &Product, view: &ViewState) -> String {
        let summary = ReviewSummary::for_product(&product.id.to_string());
        self.render_page(product, view, summary).into_html()
    }

    /// 把商品投影到页面的各个锚点，缺失的锚点直接跳过
    pub fn render_page<'s>(
        &'s self,
        product: &Product,
        view: &ViewState,
        summary: ReviewSummary,
    ) -> Page<'s> {
        let ctx = self.context(product, view, summary);
        let mut page = Page::new(&self.shell);

        page.fill(Anchor::DocumentTitle, || fragments::document_title(&ctx));
        if let Some(notice) = ctx.notice {
            page.fill(Anchor::Notification, || fragments::notification(notice));
        }
        page.fill(Anchor::Breadcrumb, || fragments::breadcrumb(&ctx));

        page.fill(Anchor::MainImage, || fragments::main_image(&ctx));
        page.fill(Anchor::GalleryThumbs, || fragments::gallery_thumbs(&ctx));

        page.fill(Anchor::ProductTitle, || fragments::product_title(&ctx));
        page.fill(Anchor::NewPrice, || fragments::new_price(&ctx));
        page.fill(Anchor::OldPrice, || fragments::old_price(&ctx));
        page.fill(Anchor::Discount, || fragments::discount(&ctx));
        page.fill(Anchor::Description, || fragments::description(&ctx));

        page.fill(Anchor::Sku, || fragments::sku(&ctx));
        page.fill(Anchor::Categories, || fragments::categories(&ctx));
        page.fill(Anchor::Tags, || fragments::tags(&ctx));

        page.fill(Anchor::TabButtons, || fragments::tab_buttons(&ctx));
        for tab in Tab::ALL {
            page.fill(tab.anchor(), || match tab {
                Tab::Description => fragments::tab_description(&ctx),
                Tab::Information => fragments::tab_information(&ctx),
                Tab::Reviews => fragments::tab_reviews(&ctx),
            });
        }

        debug!(product = %product.id, tab = ?ctx.tabs.active(), "商品页已渲染");
        page
    }

    fn context<'a>(
        &'a self,
        product: &'a Product,
        view: &ViewState,
        summary: ReviewSummary,
    ) -> RenderContext<'a> {
        let mut tabs = TabSet::new();
        if let Some(tab) = view.tab.as_deref() {
            tabs.activate_id(tab);
        }
        tabs.ensure_default();

        let mut rating = StarRating::default();
        if let Some(value) = view.rating {
            rating.select(value);
        }

        let mut gallery = Gallery::new(&product.img);
        if let Some(index) = view.image {
            gallery.select(index);
        }

        RenderContext {
            product,
            site: &self.site,
            tabs,
            rating,
            gallery,
            summary,
            notice: view.notice,
        }
    }
}

impl Default for PageService {
    fn default() -> Self {
        Self::new(PageShell::standard(), SiteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::page::model::Notice;

    fn mini_flan() -> Product {
        serde_json::from_str(r#"{"id": 7, "name": "Mini Flan", "price": {"newPrice": 25}}"#).unwrap()
    }

    fn summary() -> ReviewSummary {
        ReviewSummary { count: 20, average: 4.5 }
    }

    #[test]
    fn test_mini_flan_fragments() {
        let service = PageService::default();
        let product = mini_flan();
        let page = service.render_page(&product, &ViewState::default(), summary());

        assert_eq!(
            page.fragment(Anchor::ProductTitle),
            Some(r#"<h1 class="product-title">🍮 Mini Flan</h1>"#)
        );
        assert!(page.fragment(Anchor::Sku).unwrap().contains(">GEL-007<"));
        assert!(page.fragment(Anchor::OldPrice).unwrap().contains("display: none"));
        assert!(page.fragment(Anchor::Discount).unwrap().contains("display: none"));
        assert_eq!(page.fragment(Anchor::DocumentTitle), Some("Mini Flan | Delicias Gelatinosas"));
        assert_eq!(page.fragment(Anchor::Notification), None);
    }

    #[test]
    fn test_partial_shell_skips_missing_regions() {
        let shell = PageShell::from_template("<h1>{{product-title}}</h1>{{tab-desc}}");
        let service = PageService::new(shell, SiteConfig::default());
        let product = mini_flan();
        let page = service.render_page(&product, &ViewState::default(), summary());

        assert!(page.fragment(Anchor::ProductTitle).is_some());
        assert!(page.fragment(Anchor::TabDesc).is_some());
        assert!(page.fragment(Anchor::TabReviews).is_none());
        assert!(page.fragment(Anchor::GalleryThumbs).is_none());
    }

    #[test]
    fn test_view_state_drives_fragments() {
        let service = PageService::default();
        let product: Product = serde_json::from_str(
            r#"{"id": 3, "name": "Copa", "price": {"newPrice": 10},
                "img": {"singleImage": "main.jpg", "thumbs": ["a.jpg", "b.jpg"]}}"#,
        )
        .unwrap();
        let view = ViewState {
            tab: Some("reviews".to_string()),
            image: Some(1),
            rating: Some(4),
            notice: Some(Notice::ReviewReceived),
        };
        let page = service.render_page(&product, &view, summary());

        assert!(page.fragment(Anchor::MainImage).unwrap().contains(r#"src="b.jpg""#));
        assert!(page
            .fragment(Anchor::TabReviews)
            .unwrap()
            .starts_with(r#"<div class="content active" id="reviews">"#));
        assert!(page
            .fragment(Anchor::TabDesc)
            .unwrap()
            .starts_with(r#"<div class="content" id="desc">"#));
        assert!(page
            .fragment(Anchor::TabReviews)
            .unwrap()
            .contains(r#"<input type="hidden" name="rating" value="4">"#));
        assert!(page.fragment(Anchor::Notification).unwrap().contains("¡Gracias por tu reseña!"));
    }

    #[test]
    fn test_custom_site_config() {
        let site = SiteConfig {
            sku_prefix: "FLAN-".to_string(),
            currency: "$".to_string(),
            brand: "Tienda".to_string(),
            ..SiteConfig::default()
        };
        let service = PageService::new(PageShell::standard(), site);
        let html = service.render(&mini_flan(), &ViewState::default());

        assert!(html.contains("<title>Mini Flan | Tienda</title>"));
        assert!(html.contains(">FLAN-007<"));
        assert!(html.contains(">$ 25.00<"));
    }
}
