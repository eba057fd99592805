//! 把单个商品页渲染到标准输出
//!
//! 解析失败时在标准错误输出重定向目标并以非零状态退出。

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use storefront::app::catalog::service::CatalogService;
use storefront::app::page::model::ViewState;
use storefront::app::page::service::PageService;
use storefront::app::page::shell::PageShell;
use storefront::config::{load_config, Config};
use storefront::infrastructure::catalog_source::JsonFileCatalog;
use storefront::infrastructure::logger::Logger;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "render-page", about = "Render one product detail page from a JSON catalog")]
struct Args {
    /// JSON catalog file
    #[arg(long)]
    catalog: PathBuf,

    /// Product id as it would appear in the `id` query parameter
    #[arg(long)]
    id: Option<String>,

    /// Active tab (desc, info, reviews)
    #[arg(long)]
    tab: Option<String>,

    /// Thumbnail index shown as the main image
    #[arg(long)]
    image: Option<usize>,

    /// Selected star rating (1-5)
    #[arg(long)]
    rating: Option<u8>,

    /// Storefront TOML config, defaults to the usual lookup (site section is used)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page template with {{anchor}} markers
    #[arg(long)]
    template: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => load_config()?,
    };
    Logger::init("warn");

    let shell = match &args.template {
        Some(path) => PageShell::from_template(std::fs::read_to_string(path)?),
        None => PageShell::standard(),
    };
    let pages = PageService::new(shell, config.site.clone());
    let catalog = CatalogService::new(Arc::new(JsonFileCatalog::new(&args.catalog)));

    match catalog.resolve(args.id.as_deref()).await {
        Ok(product) => {
            let view = ViewState {
                tab: args.tab,
                image: args.image,
                rating: args.rating,
                notice: None,
            };
            print!("{}", pages.render(&product, &view));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            warn!(error = %err, "商品解析失败");
            eprintln!("redirect: {}", config.site.listing_url);
            Ok(ExitCode::from(2))
        }
    }
}
