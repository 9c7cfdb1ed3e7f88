// Biblioteca raiz do crate `bolsas-api`.
// Reexporta os módulos principais e a função de conveniência `run_server`
// que sobe o servidor HTTP do catálogo.
pub mod api_json;
pub mod client;
pub mod data;
pub mod mappings;
pub mod models;
pub mod query;
pub mod server;

/// Sobe o servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
