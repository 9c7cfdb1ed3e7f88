//! Motor de consulta: filtro, ordenação, paginação, formatação e projeção.
//!
//! O pipeline é estritamente ordenado. A contagem de itens é feita depois do
//! filtro e antes do recorte, e a formatação acontece só sobre a página
//! devolvida, então o custo de apresentação é pago apenas pelos registros
//! retornados.

use std::cmp::Ordering;

use serde_json::Value;

use crate::mappings::{collation_key, discount_percentage, format_currency, map_kind, map_level};
use crate::models::{
    DEFAULT_LIMIT, DEFAULT_PAGE, PaginatedResponse, Pagination, ProcessedOffer, QueryFilters,
    RawOffer, SortBy, SortOrder,
};

/// Ponto de entrada único do motor: aplica a especificação de consulta
/// completa sobre a coleção crua e devolve a página formatada (possivelmente
/// projetada) com os metadados de paginação.
pub fn query_offers(offers: &[RawOffer], filters: &QueryFilters) -> PaginatedResponse<Value> {
    let mut selected: Vec<&RawOffer> =
        offers.iter().filter(|offer| matches_filters(offer, filters)).collect();

    if let Some(sort_by) = filters.sort_by {
        sort_offers(&mut selected, sort_by, filters.sort_order);
    }

    // page/limit zerados não passam pela borda HTTP, mas construção direta
    // dos filtros não pode derrubar a consulta: caem nos padrões.
    let page = if filters.page == 0 { DEFAULT_PAGE } else { filters.page };
    let limit = if filters.limit == 0 { DEFAULT_LIMIT } else { filters.limit };

    let total_items = selected.len();
    let total_pages = total_items.div_ceil(limit);
    let start = (page - 1).saturating_mul(limit);

    let data: Vec<Value> = selected
        .iter()
        .skip(start)
        .take(limit)
        .map(|offer| project_offer(&process_offer(offer), filters.fields.as_deref()))
        .collect();

    PaginatedResponse {
        data,
        pagination: Pagination {
            current_page: page,
            total_pages,
            total_items,
            items_per_page: limit,
        },
    }
}

/// Um registro entra no resultado sse todos os predicados ativos valem.
/// Predicado ausente não restringe nada.
fn matches_filters(offer: &RawOffer, filters: &QueryFilters) -> bool {
    if let Some(levels) = &filters.level {
        if !levels.is_empty() && !levels.iter().any(|level| level == &offer.level) {
            return false;
        }
    }

    if let Some(kinds) = &filters.kind {
        if !kinds.is_empty() && !kinds.iter().any(|kind| kind == &offer.kind) {
            return false;
        }
    }

    // Faixa de preço sobre o preço com bolsa, limites inclusivos
    if let Some(min) = filters.min_price {
        if offer.offered_price < min {
            return false;
        }
    }
    if let Some(max) = filters.max_price {
        if offer.offered_price > max {
            return false;
        }
    }

    if let Some(search) = &filters.search {
        let term = search.to_lowercase();
        if !offer.course_name.to_lowercase().contains(&term) {
            return false;
        }
    }

    true
}

/// Ordenação estável pelo campo pedido. "desc" inverte o comparador, o que
/// mantém a ordem de chegada entre empates nas duas direções.
fn sort_offers(offers: &mut [&RawOffer], sort_by: SortBy, order: SortOrder) {
    offers.sort_by(|a, b| {
        let ordering = match sort_by {
            SortBy::CourseName => {
                collation_key(&a.course_name).cmp(&collation_key(&b.course_name))
            }
            SortBy::OfferedPrice => cmp_f64(a.offered_price, b.offered_price),
            SortBy::Rating => cmp_f64(a.rating, b.rating),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

// Dados bem formados não carregam NaN; empate é o fallback seguro.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Converte uma oferta crua na forma de exibição: preços em BRL, desconto
/// calculado e categorias traduzidas. Código de categoria fora das tabelas
/// fica como veio da fonte, nunca vira valor indefinido.
pub fn process_offer(offer: &RawOffer) -> ProcessedOffer {
    ProcessedOffer {
        course_name: offer.course_name.clone(),
        rating: offer.rating,
        full_price: format_currency(offer.full_price),
        offered_price: format_currency(offer.offered_price),
        discount_percentage: discount_percentage(offer.full_price, offer.offered_price),
        kind: map_kind(&offer.kind).map(str::to_string).unwrap_or_else(|| offer.kind.clone()),
        level: map_level(&offer.level).map(str::to_string).unwrap_or_else(|| offer.level.clone()),
        ies_logo: offer.ies_logo.clone(),
        ies_name: offer.ies_name.clone(),
    }
}

/// Projeção subtrativa: com lista de campos não vazia, mantém só os campos
/// pedidos que existem na oferta serializada. Nomes desconhecidos (ou campos
/// sem valor, como `iesLogo` ausente) são omitidos em silêncio, nunca
/// inseridos como null.
fn project_offer(offer: &ProcessedOffer, fields: Option<&[String]>) -> Value {
    let mut value = serde_json::to_value(offer).unwrap_or(Value::Null);
    let Some(fields) = fields else {
        return value;
    };
    if fields.is_empty() {
        return value;
    }

    let Value::Object(full) = &mut value else {
        return value;
    };
    let mut projected = serde_json::Map::new();
    for field in fields {
        if let Some(v) = full.remove(field) {
            projected.insert(field.clone(), v);
        }
    }
    Value::Object(projected)
}
