//! Adaptador de requisição: converte os pares crus do query string na
//! especificação estrita [`QueryFilters`].
//!
//! Parâmetros de lista podem chegar repetidos (`level=a&level=b`), separados
//! por vírgula (`level=a,b`) ou como escalar único; os três formatos
//! normalizam para a mesma sequência. Números que não parseiam são tratados
//! como ausentes, nunca como erro.

use crate::models::{DEFAULT_LIMIT, DEFAULT_PAGE, QueryFilters, SortBy, SortOrder};

/// Monta o `QueryFilters` validado a partir dos pares ordenados do query
/// string. Nenhum mapa frouxo atravessa esta borda: o motor de consulta só
/// recebe valores já tipados.
pub fn parse_filters(params: &[(String, String)]) -> QueryFilters {
    QueryFilters {
        level: parse_list_param(params, "level"),
        kind: parse_list_param(params, "kind"),
        min_price: parse_number_param(params, "minPrice"),
        max_price: parse_number_param(params, "maxPrice"),
        search: first_value(params, "search")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        sort_by: first_value(params, "sortBy").and_then(SortBy::parse),
        sort_order: first_value(params, "sortOrder").map(SortOrder::parse).unwrap_or_default(),
        page: parse_index_param(params, "page", DEFAULT_PAGE),
        limit: parse_index_param(params, "limit", DEFAULT_LIMIT),
        fields: parse_list_param(params, "fields"),
    }
}

fn first_value<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
}

/// Toda ocorrência do parâmetro contribui; cada valor é quebrado nas
/// vírgulas, aparado, e entradas vazias são descartadas. Sem sobreviventes,
/// o parâmetro conta como ausente.
fn parse_list_param(params: &[(String, String)], name: &str) -> Option<Vec<String>> {
    let values: Vec<String> = params
        .iter()
        .filter(|(key, _)| key == name)
        .flat_map(|(_, value)| value.split(','))
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    if values.is_empty() { None } else { Some(values) }
}

fn parse_number_param(params: &[(String, String)], name: &str) -> Option<f64> {
    first_value(params, name).and_then(|value| value.trim().parse::<f64>().ok())
}

/// Inteiro positivo com padrão: ausente, não numérico ou menor que 1 caem no
/// padrão.
fn parse_index_param(params: &[(String, String)], name: &str, default: usize) -> usize {
    first_value(params, name)
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pares(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_parametro_repetido_vira_lista() {
        let filters =
            parse_filters(&pares(&[("level", "bacharelado"), ("level", "tecnologo")]));
        assert_eq!(
            filters.level,
            Some(vec!["bacharelado".to_string(), "tecnologo".to_string()])
        );
    }

    #[test]
    fn test_lista_separada_por_virgula() {
        let filters = parse_filters(&pares(&[("kind", "Presencial,EaD")]));
        assert_eq!(filters.kind, Some(vec!["Presencial".to_string(), "EaD".to_string()]));
    }

    #[test]
    fn test_escalar_unico_vira_lista_de_um() {
        let filters = parse_filters(&pares(&[("level", "licenciatura")]));
        assert_eq!(filters.level, Some(vec!["licenciatura".to_string()]));
    }

    #[test]
    fn test_lista_apara_e_descarta_vazios() {
        let filters = parse_filters(&pares(&[("fields", "courseName, ,offeredPrice,")]));
        assert_eq!(
            filters.fields,
            Some(vec!["courseName".to_string(), "offeredPrice".to_string()])
        );
        assert_eq!(parse_filters(&pares(&[("level", "")])).level, None);
    }

    #[test]
    fn test_numeros_invalidos_contam_como_ausentes() {
        let filters = parse_filters(&pares(&[("minPrice", "abc"), ("maxPrice", "")]));
        assert_eq!(filters.min_price, None);
        assert_eq!(filters.max_price, None);

        let filters = parse_filters(&pares(&[("minPrice", "99.9"), ("maxPrice", "500")]));
        assert_eq!(filters.min_price, Some(99.9));
        assert_eq!(filters.max_price, Some(500.0));
    }

    #[test]
    fn test_page_e_limit_com_padrao() {
        let filters = parse_filters(&[]);
        assert_eq!(filters.page, 1);
        assert_eq!(filters.limit, 10);

        let filters = parse_filters(&pares(&[("page", "0"), ("limit", "abc")]));
        assert_eq!(filters.page, 1);
        assert_eq!(filters.limit, 10);

        let filters = parse_filters(&pares(&[("page", "3"), ("limit", "25")]));
        assert_eq!(filters.page, 3);
        assert_eq!(filters.limit, 25);

        // fracionário e negativo não são inteiros positivos
        let filters = parse_filters(&pares(&[("page", "2.5"), ("limit", "-3")]));
        assert_eq!(filters.page, 1);
        assert_eq!(filters.limit, 10);
    }

    #[test]
    fn test_sort_by_restrito_aos_nomes_conhecidos() {
        let filters = parse_filters(&pares(&[("sortBy", "offeredPrice")]));
        assert_eq!(filters.sort_by, Some(SortBy::OfferedPrice));

        let filters = parse_filters(&pares(&[("sortBy", "iesName")]));
        assert_eq!(filters.sort_by, None);
    }

    #[test]
    fn test_sort_order() {
        assert_eq!(parse_filters(&pares(&[("sortOrder", "desc")])).sort_order, SortOrder::Desc);
        assert_eq!(parse_filters(&pares(&[("sortOrder", "asc")])).sort_order, SortOrder::Asc);
        assert_eq!(parse_filters(&pares(&[("sortOrder", "banana")])).sort_order, SortOrder::Asc);
        assert_eq!(parse_filters(&[]).sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_search_em_branco_conta_como_ausente() {
        assert_eq!(parse_filters(&pares(&[("search", "  ")])).search, None);
        assert_eq!(
            parse_filters(&pares(&[("search", " medicina ")])).search,
            Some("medicina".to_string())
        );
    }
}
