//! 各页面区域的 HTML 片段
//!
//! 目录中的文本一律转义后再插入。

use crate::app::catalog::model::Product;
use crate::app::{PRODUCT_PATH, REVIEW_FORM_PATH};
use crate::config::SiteConfig;
use crate::utils::{escape_html, format_price, format_sku, page_href};

use super::labels::{category_emoji, category_label, product_tags};
use super::model::{Notice, ReviewSummary};
use super::state::{Gallery, StarRating, Tab, TabSet, MAX_RATING};

const DEFAULT_FLAVOR: &str = "Sabor especial";
const DEFAULT_SERVINGS: &str = "6-8 personas";

/// 一次渲染所需的全部输入
pub struct RenderContext<'a> {
    pub product: &'a Product,
    pub site: &'a SiteConfig,
    pub tabs: TabSet,
    pub rating: StarRating,
    pub gallery: Gallery<'a>,
    pub summary: ReviewSummary,
    pub notice: Option<Notice>,
}

impl RenderContext<'_> {
    fn id(&self) -> String {
        self.product.id.to_string()
    }

    fn name(&self) -> String {
        escape_html(&self.product.name)
    }

    fn price(&self, amount: f64) -> String {
        format_price(&self.site.currency, amount)
    }

    /// 指向本页的链接，保留当前的界面状态
    fn link(&self, tab: Option<Tab>, image: Option<usize>, rating: Option<u8>) -> String {
        let mut params = vec![("id", self.id())];
        if let Some(tab) = tab {
            params.push(("tab", tab.id().to_string()));
        }
        if let Some(image) = image {
            params.push(("image", image.to_string()));
        }
        if let Some(rating) = rating {
            params.push(("rating", rating.to_string()));
        }
        escape_html(&page_href(PRODUCT_PATH, &params))
    }

    fn category_href(&self) -> String {
        let params: Vec<(&str, String)> = self
            .product
            .category()
            .map(|category| vec![("category", category.to_string())])
            .unwrap_or_default();
        escape_html(&page_href(&self.site.listing_url, &params))
    }
}

pub fn document_title(ctx: &RenderContext) -> String {
    format!("{} | {}", ctx.name(), escape_html(&ctx.site.brand))
}

pub fn notification(notice: Notice) -> String {
    format!(
        r#"<div class="notification notification-{}" role="status">{}</div>"#,
        notice.kind(),
        notice.message()
    )
}

pub fn breadcrumb(ctx: &RenderContext) -> String {
    format!(
        r#"<ul>
    <li><a href="{home}">Inicio</a></li>
    <li><a href="{listing}">Catálogo</a></li>
    <li><a href="{category_href}">{category}</a></li>
    <li>{name}</li>
</ul>"#,
        home = escape_html(&ctx.site.home_url),
        listing = escape_html(&ctx.site.listing_url),
        category_href = ctx.category_href(),
        category = category_label(ctx.product.category()),
        name = ctx.name(),
    )
}

pub fn main_image(ctx: &RenderContext) -> String {
    format!(
        r#"<img id="single-image" src="{}" alt="{}">"#,
        escape_html(ctx.gallery.primary()),
        ctx.name()
    )
}

pub fn gallery_thumbs(ctx: &RenderContext) -> String {
    let items: String = ctx
        .gallery
        .thumbs()
        .iter()
        .enumerate()
        .map(|(index, thumb)| {
            let class = if ctx.gallery.selected() == Some(index) {
                "glide__slide active"
            } else {
                "glide__slide"
            };
            format!(
                r#"
    <li class="{class}"><a href="{href}" data-image="{index}"><img src="{src}" alt="{name} - Vista {view}"></a></li>"#,
                href = ctx.link(ctx.tabs.active(), Some(index), ctx.rating.selected()),
                src = escape_html(thumb),
                name = ctx.name(),
                view = index + 1,
            )
        })
        .collect();

    format!("<ul class=\"gallery-thumbs\">{}\n</ul>", items)
}

pub fn product_title(ctx: &RenderContext) -> String {
    format!(
        r#"<h1 class="product-title">{} {}</h1>"#,
        category_emoji(ctx.product.category()),
        ctx.name()
    )
}

pub fn new_price(ctx: &RenderContext) -> String {
    format!(
        r#"<strong class="new-price">{}</strong>"#,
        ctx.price(ctx.product.price.new_price)
    )
}

pub fn old_price(ctx: &RenderContext) -> String {
    match ctx.product.old_price() {
        Some(old) => format!(
            r#"<span class="old-price" style="display: inline">{}</span>"#,
            ctx.price(old)
        ),
        None => r#"<span class="old-price" style="display: none"></span>"#.to_string(),
    }
}

pub fn discount(ctx: &RenderContext) -> String {
    match ctx.product.discount() {
        Some(discount) => format!(
            r#"<span class="product-discount" style="display: inline-block">-{}%</span>"#,
            discount
        ),
        None => r#"<span class="product-discount" style="display: none"></span>"#.to_string(),
    }
}

pub fn description(ctx: &RenderContext) -> String {
    let body = match ctx.product.description() {
        Some(text) => escape_html(text),
        None => generated_description(ctx.product),
    };
    format!(r#"<div class="product-description">{}</div>"#, body)
}

fn generated_description(product: &Product) -> String {
    let flavor = product.flavor().map(escape_html);
    format!(
        r#"✨ Deliciosa gelatina de {sentence_flavor}.
<br><br>
📏 <strong>Porciones:</strong> {servings}
<br>
🍓 <strong>Sabor:</strong> {flavor}
<br><br>
Perfecta para cualquier ocasión especial. Elaborada con ingredientes de la más alta calidad y sin conservadores artificiales. ¡Una explosión de sabor que sorprenderá a todos! 🎉"#,
        sentence_flavor = flavor.as_deref().unwrap_or("sabor especial"),
        servings = product.servings().map_or_else(|| DEFAULT_SERVINGS.to_string(), escape_html),
        flavor = flavor.as_deref().unwrap_or("Sabor único"),
    )
}

pub fn sku(ctx: &RenderContext) -> String {
    format!(
        r##"<div class="product-sku"><span>SKU:</span> <a href="#">{}</a></div>"##,
        escape_html(&format_sku(&ctx.site.sku_prefix, &ctx.id()))
    )
}

pub fn categories(ctx: &RenderContext) -> String {
    format!(
        r#"<div class="product-categories"><span>Categorías:</span> <a href="{}">{}, Gelatinas Artesanales</a></div>"#,
        ctx.category_href(),
        category_label(ctx.product.category())
    )
}

pub fn tags(ctx: &RenderContext) -> String {
    format!(
        r##"<div class="product-tags"><span>Etiquetas:</span> <a href="#">{}</a></div>"##,
        product_tags(ctx.product.category()).join(", ")
    )
}

pub fn tab_buttons(ctx: &RenderContext) -> String {
    Tab::ALL
        .into_iter()
        .map(|tab| {
            format!(
                r#"<li><a href="{href}" class="{class}" data-id="{id}">{label}</a></li>"#,
                href = ctx.link(Some(tab), ctx.gallery.selected(), ctx.rating.selected()),
                class = active_class("tab-button", ctx.tabs.is_active(tab)),
                id = tab.id(),
                label = tab.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn active_class(base: &str, active: bool) -> String {
    if active {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}

fn tab_pane(ctx: &RenderContext, tab: Tab, body: String) -> String {
    format!(
        "<div class=\"{}\" id=\"{}\">\n{}\n</div>",
        active_class("content", ctx.tabs.is_active(tab)),
        tab.id(),
        body
    )
}

pub fn tab_description(ctx: &RenderContext) -> String {
    let text = ctx.product.description().map_or_else(
        || "Deliciosa gelatina artesanal elaborada con los mejores ingredientes.".to_string(),
        escape_html,
    );
    let body = format!(
        r#"<h3>{emoji} Sobre esta Gelatina</h3>
<p>{text}</p>
<p><strong>Características especiales:</strong></p>
<ul class="feature-list">
    <li>✅ Elaborada con ingredientes naturales</li>
    <li>✅ Sin conservadores artificiales</li>
    <li>✅ Textura perfecta garantizada</li>
    <li>✅ Sabor auténtico y delicioso</li>
    <li>✅ Presentación impecable</li>
</ul>
<p>
    <strong>💡 Recomendación:</strong> Mantener refrigerada hasta el momento de servir.
    Para mejor experiencia, sacar del refrigerador 10 minutos antes de degustar.
</p>"#,
        emoji = category_emoji(ctx.product.category()),
    );
    tab_pane(ctx, Tab::Description, body)
}

pub fn tab_information(ctx: &RenderContext) -> String {
    let product = ctx.product;
    let mut price = ctx.price(product.price.new_price);
    if let Some(old) = product.old_price() {
        price.push_str(&format!(" (antes {})", ctx.price(old)));
    }

    let rows = [
        ("Sabor", product.flavor().map_or_else(|| DEFAULT_FLAVOR.to_string(), escape_html)),
        ("Porciones", product.servings().map_or_else(|| DEFAULT_SERVINGS.to_string(), escape_html)),
        ("Categoría", category_label(product.category()).to_string()),
        ("Precio", price),
        ("Tiempo de entrega", "Mínimo 24 horas de anticipación".to_string()),
        ("Conservación", "Refrigerar a 4°C. Consumir en 5 días".to_string()),
    ];
    let rows: String = rows
        .iter()
        .map(|(label, value)| format!("\n        <tr><th>{}</th><td>{}</td></tr>", label, value))
        .collect();

    let body = format!(
        "<h3>📋 Información del Producto</h3>\n<table class=\"product-specs\">\n    <tbody>{}\n    </tbody>\n</table>",
        rows
    );
    tab_pane(ctx, Tab::Information, body)
}

fn star_selector(ctx: &RenderContext) -> String {
    (1..=MAX_RATING)
        .map(|value| {
            format!(
                r#"
        <a href="{href}" class="{class}" data-rating="{value}">{icons}</a>"#,
                href = ctx.link(Some(Tab::Reviews), ctx.gallery.selected(), Some(value)),
                class = active_class("star", ctx.rating.is_active(value)),
                icons = r#"<i class="bi bi-star-fill"></i>"#.repeat(value as usize),
            )
        })
        .collect()
}

pub fn tab_reviews(ctx: &RenderContext) -> String {
    let rating_input = ctx
        .rating
        .selected()
        .map(|value| format!(r#"<input type="hidden" name="rating" value="{}">"#, value))
        .unwrap_or_default();

    let body = format!(
        r#"<h3>⭐ {count} reseñas para {name}</h3>
<div class="review-summary">
    <h4>Calificación promedio: {average:.1}/5 ⭐</h4>
    <p>Basado en {count} reseñas verificadas de clientes</p>
</div>
<div class="comments">
    <p class="comments-empty">
        <i class="bi bi-chat-heart"></i><br><br>
        ¡Sé el primero en dejar una reseña de este producto!<br>
        Tus comentarios nos ayudan a mejorar nuestros productos.
    </p>
</div>
<div class="review-form-wrapper">
    <h2>✍️ Agregar una reseña</h2>
    <form action="{action}" method="post" class="comment-form">
        <p class="comment-notes">
            Tu correo electrónico no será publicado. Los campos requeridos están marcados con
            <span class="required">*</span>
        </p>
        <input type="hidden" name="product_id" value="{id}">
        {rating_input}
        <div class="comment-form-rating">
            <label>Tu calificación <span class="required">*</span></label>
            <div class="stars">{stars}
            </div>
        </div>
        <div class="comment-form-comment form-comment">
            <label for="form-review">Tu reseña <span class="required">*</span></label>
            <textarea cols="50" rows="10" id="form-review" name="review" required
                placeholder="Cuéntanos tu experiencia con este producto..."></textarea>
        </div>
        <div class="comment-form-author form-comment">
            <label for="name">Nombre <span class="required">*</span></label>
            <input type="text" id="name" name="name" required placeholder="Tu nombre">
        </div>
        <div class="comment-form-email form-comment">
            <label for="email">Correo electrónico <span class="required">*</span></label>
            <input type="email" id="email" name="email" required placeholder="tu@email.com">
        </div>
        <div class="comment-form-cookie">
            <input type="checkbox" id="cookie" name="cookie" value="on">
            <label for="cookie">
                Guardar mi nombre y correo en este navegador para la próxima vez que comente.
            </label>
        </div>
        <div class="form-submit">
            <input class="btn btn-submit btn-primary" type="submit" value="Publicar Reseña">
        </div>
    </form>
</div>"#,
        count = ctx.summary.count,
        average = ctx.summary.average,
        name = ctx.name(),
        action = REVIEW_FORM_PATH,
        id = escape_html(&ctx.id()),
        rating_input = rating_input,
        stars = star_selector(ctx),
    );
    tab_pane(ctx, Tab::Reviews, body)
}
