// Servidor HTTP do catálogo de bolsas: rotas, CORS e tradução de erros.

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use serde_json::json;
use tracing::error;

use crate::api_json::parse_filters;
use crate::data::OfferStore;
use crate::query::query_offers;

/// GET /api/offers
/// Consulta o catálogo com os filtros, ordenação, paginação e projeção
/// vindos do query string. Os pares chegam crus (inclusive repetidos) e a
/// borda `api_json` decide o que é válido.
pub async fn offers_handler(
    store: web::Data<OfferStore>,
    query: web::Query<Vec<(String, String)>>,
) -> impl Responder {
    let filters = parse_filters(&query.into_inner());

    match store.load_raw_offers() {
        Ok(offers) => HttpResponse::Ok().json(query_offers(&offers, &filters)),
        Err(e) => {
            error!("falha ao carregar ofertas: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Internal server error",
                "message": format!("{}", e)
            }))
        }
    }
}

/// GET /health
/// Independente do catálogo: responde status e o instante atual.
pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Qualquer rota fora da tabela responde 404 em JSON.
pub async fn not_found_handler() -> impl Responder {
    HttpResponse::NotFound().json(json!({"error": "Route not found"}))
}

/// Sobe o servidor: um único `OfferStore` compartilhado entre os workers,
/// CORS liberado para o cliente de navegador.
pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    let store = web::Data::new(OfferStore::new());

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(Cors::permissive())
            .route("/api/offers", web::get().to(offers_handler))
            .route("/health", web::get().to(health_handler))
            .default_service(web::route().to(not_found_handler))
    })
    .bind(bind_addr)?
    .run()
    .await
}
