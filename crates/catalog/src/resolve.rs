use serde_json::Value;

use crate::record::RawRow;

/// Возвращает первое заполненное значение среди ключей-кандидатов.
///
/// Ключи перебираются строго по порядку списка. Отсутствующий ключ,
/// null и пустая строка считаются незаполненными; любое другое
/// значение (включая 0) — заполненным.
pub fn resolve_field<'a>(row: &'a RawRow, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|key| row.get(*key))
        .find(|value| !is_blank(value))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
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
    fn test_resolve_first_candidate_wins() {
        let row = row(&[
            ("CODICE", json!("A1")),
            ("Codice", json!("A2")),
            ("codice", json!("A3")),
        ]);
        let value = resolve_field(&row, &["CODICE", "Codice", "codice"]);
        assert_eq!(value, Some(&json!("A1")));
    }

    #[test]
    fn test_resolve_falls_through_casings() {
        let row = row(&[("codice", json!("A3"))]);
        let value = resolve_field(&row, &["CODICE", "Codice", "codice"]);
        assert_eq!(value, Some(&json!("A3")));
    }

    #[test]
    fn test_resolve_skips_blank_values() {
        let row = row(&[
            ("PREZZO", Value::Null),
            ("Prezzo", json!("")),
            ("prezzo", json!(12.5)),
        ]);
        let value = resolve_field(&row, &["PREZZO", "Prezzo", "prezzo"]);
        assert_eq!(value, Some(&json!(12.5)));
    }

    #[test]
    fn test_resolve_zero_is_present() {
        let row = row(&[("PREZZO", json!(0))]);
        let value = resolve_field(&row, &["PREZZO", "Prezzo", "prezzo"]);
        assert_eq!(value, Some(&json!(0)));
    }

    #[test]
    fn test_resolve_whitespace_is_present() {
        let row = row(&[
            ("DESCRIZIONE", json!("   ")),
            ("Descrizione", json!("Penna a sfera")),
        ]);
        let value = resolve_field(&row, &["DESCRIZIONE", "Descrizione", "descrizione"]);
        assert_eq!(value, Some(&json!("   ")));
    }

    #[test]
    fn test_resolve_missing_field() {
        let row = row(&[("ARTICOLO", json!("Penna"))]);
        assert_eq!(resolve_field(&row, &["CODICE", "Codice", "codice"]), None);
    }
}
