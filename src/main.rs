// --- Catálogo de Bolsas de Cursos - arquivo principal ---

use bolsas_api::run_server;
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let bind = format!("127.0.0.1:{}", port);
    info!("iniciando servidor em http://{}", bind);
    info!("API disponível em http://{}/api/offers", bind);
    info!("health check em http://{}/health", bind);
    run_server(&bind).await
}
