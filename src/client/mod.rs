//! Cliente HTTP do endpoint de ofertas (lado consumidor).
//!
//! Só emite a requisição e decodifica o envelope de resposta; toda a lógica
//! de consulta vive no servidor. Sem retry automático: quem chama decide
//! quando tentar de novo.

use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{PaginatedResponse, QueryFilters};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("falha de transporte: {0}")]
    Http(String),
    #[error("resposta com status {0}")]
    Status(u16),
    #[error("falha ao decodificar resposta: {0}")]
    Decode(String),
}

/// Forma de decodificação de uma oferta exibível. Todos os campos são
/// opcionais para que respostas projetadas também decodifiquem.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOffer {
    pub course_name: Option<String>,
    pub rating: Option<f64>,
    pub full_price: Option<String>,
    pub offered_price: Option<String>,
    pub discount_percentage: Option<String>,
    pub kind: Option<String>,
    pub level: Option<String>,
    pub ies_logo: Option<String>,
    pub ies_name: Option<String>,
}

pub struct OffersApiClient {
    base_url: String,
    http: Client,
}

impl OffersApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: Client::new() }
    }

    /// Monta os pares do query string no mesmo formato que o cliente de
    /// navegador envia: listas viram pares repetidos, escalares um par único.
    /// page e limit vão sempre, os demais só quando presentes.
    fn query_pairs(filters: &QueryFilters) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::new();

        if let Some(levels) = &filters.level {
            for level in levels {
                pairs.push(("level".to_string(), level.clone()));
            }
        }
        if let Some(kinds) = &filters.kind {
            for kind in kinds {
                pairs.push(("kind".to_string(), kind.clone()));
            }
        }
        if let Some(min) = filters.min_price {
            pairs.push(("minPrice".to_string(), min.to_string()));
        }
        if let Some(max) = filters.max_price {
            pairs.push(("maxPrice".to_string(), max.to_string()));
        }
        if let Some(search) = &filters.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(sort_by) = filters.sort_by {
            pairs.push(("sortBy".to_string(), sort_by.as_str().to_string()));
            pairs.push(("sortOrder".to_string(), filters.sort_order.as_str().to_string()));
        }
        pairs.push(("page".to_string(), filters.page.to_string()));
        pairs.push(("limit".to_string(), filters.limit.to_string()));
        if let Some(fields) = &filters.fields {
            for field in fields {
                pairs.push(("fields".to_string(), field.clone()));
            }
        }

        pairs
    }

    /// GET /api/offers com a especificação dada, decodificando o envelope
    /// paginado.
    pub fn fetch_offers(
        &self,
        filters: &QueryFilters,
    ) -> Result<PaginatedResponse<ClientOffer>, ClientError> {
        let url = format!("{}/api/offers", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .get(&url)
            .query(&Self::query_pairs(filters))
            .send()
            .map_err(|e| ClientError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        response.json().map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SortBy, SortOrder};

    #[test]
    fn test_query_pairs_listas_viram_pares_repetidos() {
        let filters = QueryFilters {
            level: Some(vec!["bacharelado".to_string(), "tecnologo".to_string()]),
            sort_by: Some(SortBy::OfferedPrice),
            sort_order: SortOrder::Desc,
            ..QueryFilters::default()
        };

        let pairs = OffersApiClient::query_pairs(&filters);
        assert_eq!(
            pairs,
            vec![
                ("level".to_string(), "bacharelado".to_string()),
                ("level".to_string(), "tecnologo".to_string()),
                ("sortBy".to_string(), "offeredPrice".to_string()),
                ("sortOrder".to_string(), "desc".to_string()),
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_padrao_so_leva_paginacao() {
        let pairs = OffersApiClient::query_pairs(&QueryFilters::default());
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }
}
