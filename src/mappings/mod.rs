//! Tabelas de tradução de categorias e utilitários de formatação.
//!
//! Tudo aqui é função pura sobre tabelas fixas: tradução de modalidade e
//! grau, formatação monetária pt-BR, percentual de desconto e a chave de
//! colação usada para ordenar nomes de curso.

/// Traduz o código de modalidade para o rótulo exibido. A fonte varia a
/// caixa ("Presencial"/"presencial", "EaD"/"ead"); as quatro variantes são
/// reconhecidas. Código fora da tabela devolve `None` (categoria
/// desconhecida explícita).
pub fn map_kind(code: &str) -> Option<&'static str> {
    match code {
        "Presencial" | "presencial" => Some("Presencial"),
        "EaD" | "ead" => Some("EaD"),
        _ => None,
    }
}

/// Traduz o código de grau para o rótulo exibido. Código fora da tabela
/// devolve `None`.
pub fn map_level(code: &str) -> Option<&'static str> {
    match code {
        "bacharelado" => Some("Graduação (bacharelado)"),
        "tecnologo" => Some("Graduação (tecnólogo)"),
        "licenciatura" => Some("Graduação (licenciatura)"),
        _ => None,
    }
}

/// Formata um valor em reais no padrão pt-BR: "R$ 1.234,56".
/// Milhares separados por ponto, decimais por vírgula, sempre dois dígitos;
/// valores negativos ganham o sinal antes do símbolo ("-R$ 12,30").
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let total_cents = (value.abs() * 100.0).round() as u64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, cents)
}

/// Percentual de desconto entre o preço cheio e o preço com bolsa,
/// arredondado para o inteiro mais próximo (meio afasta do zero) e
/// renderizado como "NN%".
///
/// Preço cheio menor ou igual a zero não tem desconto definido; a divisão
/// é evitada e o resultado é "0%".
pub fn discount_percentage(full_price: f64, offered_price: f64) -> String {
    if full_price <= 0.0 {
        return "0%".to_string();
    }
    let pct = ((full_price - offered_price) / full_price * 100.0).round();
    format!("{}%", pct as i64)
}

/// Chave de colação para ordenar nomes de curso: minúsculas e sem acentos,
/// de modo que "Ética" ordene junto de "etica" e antes de "Zootecnia".
/// Mapa simples dos acentos comuns em português.
pub fn collation_key(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        let c = match ch {
            'Á' | 'À' | 'Ä' | 'Â' | 'Ã' | 'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
            'É' | 'È' | 'Ë' | 'Ê' | 'é' | 'è' | 'ë' | 'ê' => 'e',
            'Í' | 'Ì' | 'Ï' | 'Î' | 'í' | 'ì' | 'ï' | 'î' => 'i',
            'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' | 'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
            'Ú' | 'Ù' | 'Ü' | 'Û' | 'ú' | 'ù' | 'ü' | 'û' => 'u',
            'Ñ' | 'ñ' => 'n',
            'Ç' | 'ç' => 'c',
            other => other,
        };
        for low in c.to_lowercase() {
            out.push(low);
        }
    }
    out
}
