use serde_json::Value;

use crate::resolve::resolve_field;

/// Сырая строка листа, как её отдаёт парсер: заголовок колонки -> значение ячейки.
pub type RawRow = serde_json::Map<String, Value>;

/// Цена из прайса: в файле встречаются и числа, и текст.
#[derive(Debug, Clone, PartialEq)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Price {
    /// Значение без валютного префикса.
    pub fn display(&self) -> String {
        match self {
            Price::Number(n) => format!("{}", n),
            Price::Text(s) => s.clone(),
        }
    }
}

/// Каноническая запись товара после нормализации заголовков.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Код товара, задаёт имя файла картинки
    pub code: String,
    /// Отображаемое название
    pub article: String,
    pub description: Option<String>,
    pub price: Option<Price>,
    /// Категория для страничной фильтрации
    pub category: Option<String>,
    /// Пометка "si" выводит товар на главную
    pub highlighted: Option<String>,
}

const CODE_KEYS: [&str; 3] = ["CODICE", "Codice", "codice"];
const ARTICLE_KEYS: [&str; 3] = ["ARTICOLO", "Articolo", "articolo"];
const DESCRIPTION_KEYS: [&str; 3] = ["DESCRIZIONE", "Descrizione", "descrizione"];
const PRICE_KEYS: [&str; 3] = ["PREZZO", "Prezzo", "prezzo"];
const CATEGORY_KEYS: [&str; 3] = ["CATEGORIA", "Categoria", "categoria"];
const HIGHLIGHTED_KEYS: [&str; 3] = ["EVIDENZA", "Evidenza", "evidenza"];

/// Логические поля и варианты их заголовков в порядке предпочтения.
/// Используется импортёром для проверки сопоставления колонок.
pub const FIELD_CANDIDATES: [(&str, [&str; 3]); 6] = [
    ("codice", CODE_KEYS),
    ("articolo", ARTICLE_KEYS),
    ("descrizione", DESCRIPTION_KEYS),
    ("prezzo", PRICE_KEYS),
    ("categoria", CATEGORY_KEYS),
    ("evidenza", HIGHLIGHTED_KEYS),
];

/// Собирает каноническую запись из сырой строки.
///
/// Для каждого поля перебираются три написания заголовка;
/// ненайденные поля остаются пустыми и подставляются при отображении.
pub fn normalize_row(row: &RawRow) -> Product {
    Product {
        code: resolve_text(row, &CODE_KEYS).unwrap_or_default(),
        article: resolve_text(row, &ARTICLE_KEYS).unwrap_or_default(),
        description: resolve_text(row, &DESCRIPTION_KEYS),
        price: resolve_price(row),
        category: resolve_text(row, &CATEGORY_KEYS),
        highlighted: resolve_text(row, &HIGHLIGHTED_KEYS),
    }
}

/// Нормализует весь набор строк за один проход.
pub fn normalize_rows(rows: &[RawRow]) -> Vec<Product> {
    rows.iter().map(normalize_row).collect()
}

/// Строка цены для карточки и попапа.
pub fn price_line(price: Option<&Price>) -> String {
    match price {
        Some(p) => format!("€ {}", p.display()),
        None => "€ N/A".to_string(),
    }
}

/// Итог проверки сопоставления: логическое поле и заголовок,
/// под которым оно встретилось в файле.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMatch {
    pub field: &'static str,
    pub header: Option<&'static str>,
}

/// Проверяет, какие логические поля представлены в наборе строк.
///
/// Поле найдено, если хотя бы одна строка содержит один из его
/// заголовков-кандидатов. Парсер листа пропускает пустые ячейки,
/// поэтому колонка без единого значения не видна вовсе.
pub fn match_columns(rows: &[RawRow]) -> Vec<ColumnMatch> {
    FIELD_CANDIDATES
        .into_iter()
        .map(|(field, candidates)| ColumnMatch {
            field,
            header: candidates
                .into_iter()
                .find(|key| rows.iter().any(|row| row.contains_key(*key))),
        })
        .collect()
}

fn resolve_text(row: &RawRow, candidates: &[&str]) -> Option<String> {
    resolve_field(row, candidates).map(text_value)
}

fn resolve_price(row: &RawRow) -> Option<Price> {
    resolve_field(row, &PRICE_KEYS).map(|value| match value {
        Value::Number(n) => n
            .as_f64()
            .map(Price::Number)
            .unwrap_or_else(|| Price::Text(n.to_string())),
        other => Price::Text(text_value(other)),
    })
}

fn text_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: &[(&str, Value)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_normalize_upper_case_headers() {
        let row = row(&[
            ("CODICE", json!("B012")),
            ("ARTICOLO", json!("Quaderno")),
            ("DESCRIZIONE", json!("Quaderno a righe")),
            ("PREZZO", json!(2.5)),
            ("CATEGORIA", json!("Scuola")),
            ("EVIDENZA", json!("si")),
        ]);
        let product = normalize_row(&row);
        assert_eq!(product.code, "B012");
        assert_eq!(product.article, "Quaderno");
        assert_eq!(product.description.as_deref(), Some("Quaderno a righe"));
        assert_eq!(product.price, Some(Price::Number(2.5)));
        assert_eq!(product.category.as_deref(), Some("Scuola"));
        assert_eq!(product.highlighted.as_deref(), Some("si"));
    }

    #[test]
    fn test_normalize_mixed_casings() {
        let row = row(&[
            ("Codice", json!("C001")),
            ("articolo", json!("Zaino")),
            ("Prezzo", json!("su richiesta")),
        ]);
        let product = normalize_row(&row);
        assert_eq!(product.code, "C001");
        assert_eq!(product.article, "Zaino");
        assert_eq!(product.price, Some(Price::Text("su richiesta".to_string())));
        assert_eq!(product.description, None);
        assert_eq!(product.category, None);
        assert_eq!(product.highlighted, None);
    }

    #[test]
    fn test_normalize_missing_fields_stay_empty() {
        let product = normalize_row(&row(&[]));
        assert_eq!(product.code, "");
        assert_eq!(product.article, "");
        assert_eq!(product.description, None);
        assert_eq!(product.price, None);
    }

    #[test]
    fn test_normalize_numeric_cell_becomes_text() {
        let row = row(&[("CODICE", json!(1042))]);
        let product = normalize_row(&row);
        assert_eq!(product.code, "1042");
    }

    #[test]
    fn test_price_line_formats() {
        assert_eq!(price_line(Some(&Price::Number(12.5))), "€ 12.5");
        assert_eq!(price_line(Some(&Price::Number(8.0))), "€ 8");
        assert_eq!(price_line(Some(&Price::Number(0.0))), "€ 0");
        assert_eq!(
            price_line(Some(&Price::Text("su richiesta".to_string()))),
            "€ su richiesta"
        );
        assert_eq!(price_line(None), "€ N/A");
    }

    #[test]
    fn test_normalize_rows_keeps_order() {
        let rows = vec![
            row(&[("CODICE", json!("A1"))]),
            row(&[("CODICE", json!("A2"))]),
        ];
        let products = normalize_rows(&rows);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].code, "A1");
        assert_eq!(products[1].code, "A2");
    }

    #[test]
    fn test_match_columns_probes_all_rows() {
        let rows = vec![
            row(&[("CODICE", json!("A1")), ("ARTICOLO", json!("Penna"))]),
            row(&[("CODICE", json!("A2")), ("prezzo", json!(3.0))]),
        ];
        let found: Vec<(&str, Option<&str>)> = match_columns(&rows)
            .into_iter()
            .map(|m| (m.field, m.header))
            .collect();
        assert_eq!(
            found,
            vec![
                ("codice", Some("CODICE")),
                ("articolo", Some("ARTICOLO")),
                ("descrizione", None),
                ("prezzo", Some("prezzo")),
                ("categoria", None),
                ("evidenza", None),
            ]
        );
    }

    #[test]
    fn test_match_columns_prefers_first_spelling() {
        let rows = vec![row(&[("Codice", json!("A1")), ("CODICE", json!("A2"))])];
        let first = &match_columns(&rows)[0];
        assert_eq!(first.field, "codice");
        assert_eq!(first.header, Some("CODICE"));
    }
}
