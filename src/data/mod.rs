//! Carga e cache da fonte de dados de ofertas.
//!
//! A fonte é um único `data.json`: ou um array de ofertas cruas, ou um
//! objeto com a propriedade `offers` contendo esse array. O conteúdo é lido
//! uma única vez por processo e mantido imutável em memória pelo
//! [`OfferStore`].

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::models::RawOffer;

/// Campos obrigatórios verificados na amostra estrutural.
const REQUIRED_FIELDS: [&str; 7] = [
    "courseName",
    "rating",
    "fullPrice",
    "offeredPrice",
    "kind",
    "level",
    "iesName",
];

/// Quantos registros iniciais participam da checagem estrutural. A checagem
/// é uma amostra barata, não uma validação do conjunto inteiro.
const STRUCTURAL_SAMPLE: usize = 3;

/// Caminhos candidatos da fonte, relativos ao diretório de trabalho,
/// tentados em ordem.
const CANDIDATE_PATHS: [&str; 3] = ["data.json", "../data.json", "data/data.json"];

/// Falhas possíveis da carga única da fonte de dados.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data.json não encontrado nos caminhos esperados")]
    DataSourceNotFound,
    #[error("arquivo de dados está vazio")]
    EmptyDataSource,
    #[error("erro de parse do JSON: {0}")]
    MalformedDataSource(String),
    #[error("formato de dados não suportado; esperado array ou objeto com \"offers\", recebido: {0}")]
    UnsupportedDataShape(String),
    #[error("array de ofertas está vazio")]
    EmptyOfferSet,
    #[error("oferta {} está sem campos obrigatórios: {}", .index, .fields.join(", "))]
    MissingRequiredFields { index: usize, fields: Vec<String> },
    #[error("falha ao ler arquivo de dados: {0}")]
    Io(String),
}

/// Remove o BOM UTF-8 inicial, se presente.
pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Procura o arquivo de dados na lista fixa de caminhos candidatos e devolve
/// o primeiro que existe.
pub fn find_data_file() -> Result<PathBuf, DataError> {
    for candidate in CANDIDATE_PATHS {
        let path = Path::new(candidate);
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
    }
    Err(DataError::DataSourceNotFound)
}

/// Aplica todas as regras de conteúdo sobre o texto da fonte: BOM, vazio,
/// parse, normalização de formato, conjunto não vazio e amostra estrutural.
pub fn parse_offers_json(content: &str) -> Result<Vec<RawOffer>, DataError> {
    let clean = strip_bom(content);
    if clean.trim().is_empty() {
        return Err(DataError::EmptyDataSource);
    }

    let parsed: Value =
        serde_json::from_str(clean).map_err(|e| DataError::MalformedDataSource(e.to_string()))?;
    let records = normalize_shape(parsed)?;

    if records.is_empty() {
        return Err(DataError::EmptyOfferSet);
    }
    validate_sample(&records)?;

    // Registros com tipo errado em algum campo (rating textual, por exemplo)
    // também contam como fonte malformada.
    serde_json::from_value(Value::Array(records))
        .map_err(|e| DataError::MalformedDataSource(e.to_string()))
}

/// Lê e interpreta a fonte a partir de um caminho concreto.
pub fn load_offers_from_path(path: &Path) -> Result<Vec<RawOffer>, DataError> {
    let content = std::fs::read_to_string(path).map_err(|e| DataError::Io(e.to_string()))?;
    parse_offers_json(&content)
}

/// Aceita um array direto ou um objeto com a propriedade `offers`.
fn normalize_shape(parsed: Value) -> Result<Vec<Value>, DataError> {
    match parsed {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("offers") {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(DataError::UnsupportedDataShape(format!(
                "a propriedade \"offers\" deve conter um array, recebido: {}",
                json_type_name(&other)
            ))),
            None => Err(DataError::UnsupportedDataShape(
                "objeto sem a propriedade \"offers\"".to_string(),
            )),
        },
        other => Err(DataError::UnsupportedDataShape(json_type_name(&other).to_string())),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Checagem estrutural dos primeiros registros: presença dos campos
/// obrigatórios, reportando índice (a partir de 1) e os nomes que faltam.
fn validate_sample(records: &[Value]) -> Result<(), DataError> {
    for (i, record) in records.iter().take(STRUCTURAL_SAMPLE).enumerate() {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| record.get(**field).is_none())
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DataError::MissingRequiredFields { index: i + 1, fields: missing });
        }
    }
    Ok(())
}

/// Dono do cache imutável de ofertas cruas.
///
/// Substitui o singleton de carga da versão anterior do serviço: o store é
/// construído uma vez na subida do servidor e passado por referência aos
/// handlers; nenhum estado global ambiente.
pub struct OfferStore {
    source: Option<PathBuf>,
    cache: Mutex<Option<Arc<Vec<RawOffer>>>>,
}

impl OfferStore {
    /// Store padrão: resolve a fonte pelos caminhos candidatos na primeira
    /// carga.
    pub fn new() -> Self {
        Self { source: None, cache: Mutex::new(None) }
    }

    /// Store com fonte fixa (testes e ferramentas).
    pub fn with_source(path: impl Into<PathBuf>) -> Self {
        Self { source: Some(path.into()), cache: Mutex::new(None) }
    }

    /// Devolve a coleção de ofertas cruas, carregando-a na primeira chamada.
    ///
    /// O mutex fica retido durante a carga: chamadas concorrentes na primeira
    /// população esperam e observam o mesmo resultado, com uma única leitura
    /// de disco. Uma carga que falha não deixa nada no cache, então a próxima
    /// chamada tenta de novo.
    pub fn load_raw_offers(&self) -> Result<Arc<Vec<RawOffer>>, DataError> {
        let mut guard = self.cache.lock().expect("offer cache mutex poisoned");
        if let Some(cached) = guard.as_ref() {
            return Ok(Arc::clone(cached));
        }

        let path = match &self.source {
            Some(fixed) => {
                if !fixed.is_file() {
                    return Err(DataError::DataSourceNotFound);
                }
                fixed.clone()
            }
            None => find_data_file()?,
        };
        let offers = load_offers_from_path(&path)?;
        info!("{} ofertas carregadas de {}", offers.len(), path.display());

        let shared = Arc::new(offers);
        *guard = Some(Arc::clone(&shared));
        Ok(shared)
    }

    /// Esvazia o cache; a próxima chamada recarrega do disco.
    pub fn reset_cache(&self) {
        let mut guard = self.cache.lock().expect("offer cache mutex poisoned");
        *guard = None;
    }
}

impl Default for OfferStore {
    fn default() -> Self {
        Self::new()
    }
}
