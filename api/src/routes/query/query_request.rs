use serde_json::Value;

/// Extracts the `query` field of a `POST /api/query` body.
///
/// `None` when the field is missing, not a string, or blank after trimming.
pub fn extract_query(body: &Value) -> Option<&str> {
    body.get("query")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|q| !q.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_only_non_blank_strings() {
        assert_eq!(extract_query(&json!({"query": "  DRS?  "})), Some("DRS?"));
        assert_eq!(extract_query(&json!({"query": "   "})), None);
        assert_eq!(extract_query(&json!({"query": 42})), None);
        assert_eq!(extract_query(&json!({"question": "DRS?"})), None);
        assert_eq!(extract_query(&json!(["DRS?"])), None);
    }
}
