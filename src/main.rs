use std::time::Duration;

use storefront::config::{locate_config_file, Config};
use storefront::infrastructure::logger::Logger;
use storefront::{build_router, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_file = locate_config_file();
    let config = match &config_file {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    config.validate()?;

    Logger::init(&config.logging.level);

    match &config_file {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let state = AppState::from_config(&config)?;
    info!(catalog = %state.catalog.source().describe(), "商品目录数据源已就绪");

    let app = build_router(state, Duration::from_secs(config.http.timeout_seconds));

    let addr = format!("{}:{}", config.http.bind_address, config.http.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 商品页服务运行在 http://{}", addr);
    info!("   GET  /product?id=<id>   - 商品详情页");
    info!("   POST /product/reviews   - 评论表单提交");
    info!("   POST /api/reviews       - 评论 JSON 提交");
    info!("   GET  /health            - 健康检查");

    axum::serve(listener, app).await?;
    Ok(())
}
