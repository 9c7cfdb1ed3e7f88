// Estruturas de dados principais do catálogo de bolsas

use serde::{Deserialize, Serialize};

/// Página padrão quando o cliente não pede nenhuma.
pub const DEFAULT_PAGE: usize = 1;
/// Tamanho de página padrão.
pub const DEFAULT_LIMIT: usize = 10;

/// Oferta crua, tal como vem da fonte de dados (`data.json`).
/// Preços em reais (numéricos) e categorias nos códigos crus da fonte.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOffer {
    pub course_name: String,
    /// Nota esperada entre 0 e 5.
    pub rating: f64,
    pub full_price: f64,
    pub offered_price: f64,
    /// Modalidade: "Presencial"/"presencial"/"EaD"/"ead" (a fonte varia a caixa).
    pub kind: String,
    /// Grau: "bacharelado" | "tecnologo" | "licenciatura".
    pub level: String,
    /// Logo da instituição; pode faltar na fonte.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ies_logo: Option<String>,
    pub ies_name: String,
}

/// Oferta pronta para exibição: preços formatados em BRL, categorias
/// traduzidas para rótulos e percentual de desconto já calculado.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedOffer {
    pub course_name: String,
    pub rating: f64,
    pub full_price: String,
    pub offered_price: String,
    pub discount_percentage: String,
    pub kind: String,
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ies_logo: Option<String>,
    pub ies_name: String,
}

/// Campo de ordenação aceito pelo motor de consulta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    CourseName,
    OfferedPrice,
    Rating,
}

impl SortBy {
    /// Converte o valor textual do query string; nomes fora da lista viram `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "courseName" => Some(Self::CourseName),
            "offeredPrice" => Some(Self::OfferedPrice),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CourseName => "courseName",
            Self::OfferedPrice => "offeredPrice",
            Self::Rating => "rating",
        }
    }
}

/// Direção de ordenação; ascendente quando o cliente não pede nada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Só "desc" inverte a ordem; qualquer outro valor cai no padrão ascendente.
    pub fn parse(value: &str) -> Self {
        match value {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Especificação de consulta já validada pela borda HTTP (`api_json`).
/// Campo ausente significa "sem restrição", nunca "rejeitar tudo".
#[derive(Debug, Clone)]
pub struct QueryFilters {
    pub level: Option<Vec<String>>,
    pub kind: Option<Vec<String>>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: SortOrder,
    pub page: usize,
    pub limit: usize,
    pub fields: Option<Vec<String>>,
}

impl Default for QueryFilters {
    fn default() -> Self {
        Self {
            level: None,
            kind: None,
            min_price: None,
            max_price: None,
            search: None,
            sort_by: None,
            sort_order: SortOrder::Asc,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            fields: None,
        }
    }
}

/// Metadados de paginação devolvidos junto com cada página.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

/// Envelope de resposta do endpoint de ofertas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}
