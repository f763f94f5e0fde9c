//! Product API server entry point.

use tokio::net::TcpListener;
use tracing::info;

use product_api::app::products::service::ProductStore;
use product_api::build_router;
use product_api::config::Config;
use product_api::infrastructure::logger::Logger;

#[tokio::main]
async fn main() {
    Logger::init();

    let config = Config::from_env();
    let app = build_router(ProductStore::shared());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");

    info!("🚀 Server is running on http://localhost:{}", config.port);
    info!("📖 API endpoints:");
    info!("   GET    /                        - welcome");
    info!("   GET    /api/products            - list (category, page, limit)");
    info!("   GET    /api/products/search     - search by name");
    info!("   GET    /api/products/stats      - counts per category");
    info!("   GET    /api/products/:id        - fetch one");
    info!("   POST   /api/products            - create");
    info!("   PUT    /api/products/:id        - partial update");
    info!("   DELETE /api/products/:id        - remove");

    axum::serve(listener, app).await.expect("server error");
}
