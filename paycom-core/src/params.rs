//! Parameter flattening, rebuilding and form encoding
//!
//! Gateway parameters are nested JSON values. Form bodies and query strings
//! need them as flat `key=value` pairs, with nesting spelled in bracket
//! notation:
//!
//! ```text
//! {"account": {"order_id": 7}, "items": [10, 20]}
//!   -> account[order_id]=7 & items[0]=10 & items[1]=20
//! ```
//!
//! # Lists and Maps
//!
//! A value is a *list* if it is a JSON array, or an empty object (an empty
//! container has no keys, so it cannot be told apart from an empty list).
//! Lists compose keys as `key[index]`, maps as `key[subkey]`.
//!
//! # Lossy Round Trip
//!
//! [`rebuild`] is the inverse of [`flatten`] only for map-shaped input:
//!
//! - list-shaped values come back as maps keyed `"0"`, `"1"`, ...
//! - empty containers flatten to nothing and so disappear
//! - a list nested directly inside a list is flattened under the outer key
//!   without its own index, so `{"a": [[1, 2]]}` flattens like `{"a": [1, 2]}`
//!
//! Callers that need the exact shape back must keep the original value.
//!
//! # Examples
//!
//! ```rust
//! use paycom_core::params::{flatten, rebuild};
//! use serde_json::json;
//!
//! let params = json!({"a": [1, 2]});
//! let pairs = flatten(params.as_object().unwrap());
//! assert_eq!(pairs, vec![("a[0]".to_string(), json!(1)), ("a[1]".to_string(), json!(2))]);
//!
//! let rebuilt = rebuild(pairs);
//! assert_eq!(serde_json::Value::Object(rebuilt), json!({"a": {"0": 1, "1": 2}}));
//! ```

use serde_json::{Map, Value};

/// Ordered `(bracketed key, scalar)` pairs produced by [`flatten`]
pub type FlattenedParams = Vec<(String, Value)>;

/// Whether `value` is list-shaped
///
/// Arrays are lists. Objects are lists only when empty. Scalars never are.
pub fn is_list(value: &Value) -> bool {
    match value {
        Value::Array(_) => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Flatten nested parameters into ordered bracket-keyed pairs
///
/// Keys follow the insertion order of `params` and of every nested map.
pub fn flatten(params: &Map<String, Value>) -> FlattenedParams {
    let mut out = Vec::new();
    flatten_map(params, None, &mut out);
    out
}

fn flatten_map(params: &Map<String, Value>, parent: Option<&str>, out: &mut FlattenedParams) {
    for (key, value) in params {
        let composed = match parent {
            Some(parent) => format!("{}[{}]", parent, key),
            None => key.clone(),
        };

        match value {
            Value::Array(items) => flatten_list(items, &composed, out),
            Value::Object(map) => flatten_map(map, Some(&composed), out),
            scalar => out.push((composed, scalar.clone())),
        }
    }
}

fn flatten_list(items: &[Value], key: &str, out: &mut FlattenedParams) {
    for (index, item) in items.iter().enumerate() {
        match item {
            // Nested lists reuse the outer key, not `key[index]`.
            Value::Array(inner) => flatten_list(inner, key, out),
            Value::Object(map) => flatten_map(map, Some(&format!("{}[{}]", key, index)), out),
            scalar => out.push((format!("{}[{}]", key, index), scalar.clone())),
        }
    }
}

/// Rebuild a nested map from bracket-keyed pairs
///
/// Each key is split into segments by removing every `]` and splitting on
/// `[`. Intermediate segments become maps (replacing any scalar already
/// sitting there); the last segment receives the value. The result never
/// contains arrays.
pub fn rebuild<I, K>(pairs: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, Value)>,
    K: AsRef<str>,
{
    let mut result = Map::new();

    for (key, value) in pairs {
        let stripped = key.as_ref().replace(']', "");
        let segments: Vec<&str> = stripped.split('[').collect();
        insert_path(&mut result, &segments, value);
    }

    result
}

fn insert_path(root: &mut Map<String, Value>, segments: &[&str], value: Value) {
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut current = root;
    for segment in parents {
        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        current = match slot {
            Value::Object(inner) => inner,
            _ => return,
        };
    }

    current.insert(last.to_string(), value);
}

/// Encode nested parameters as an `application/x-www-form-urlencoded` string
///
/// Pairs come from [`flatten`] and are joined with `&`. Brackets stay literal
/// so the output remains readable (`account[order_id]=7`).
pub fn encode_parameters(params: &Map<String, Value>) -> String {
    flatten(params)
        .iter()
        .map(|(key, value)| format!("{}={}", url_encode(key), url_encode(&scalar_to_string(value))))
        .collect::<Vec<_>>()
        .join("&")
}

/// Form-URL-encode a single string, leaving `[` and `]` unescaped
///
/// Spaces become `+`.
pub fn url_encode(input: &str) -> String {
    url::form_urlencoded::byte_serialize(input.as_bytes())
        .collect::<String>()
        .replace("%5B", "[")
        .replace("%5D", "]")
}

/// Render a scalar the way form encoders do
///
/// `true` is `"1"`; `false` and `null` are empty. Containers never reach
/// here from [`flatten`] but render as their JSON text.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null => String::new(),
        container => container.to_string(),
    }
}

/// Split an `id` out of a parameter object
///
/// - an object with an `id` member gives `(Some(id), rest)`
/// - an object without one gives `(None, object)`
/// - any other value is itself the id: `(Some(value), {})`
pub fn normalize_id(value: Value) -> (Option<Value>, Map<String, Value>) {
    match value {
        Value::Object(mut params) => {
            let id = params.remove("id");
            (id, params)
        }
        id => (Some(id), Map::new()),
    }
}

/// Loose truthiness used to decide whether an optional parameter is sent
///
/// Falsy: `null`, `false`, `0`, `0.0`, `""`, `"0"`, `[]`, `{}`.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => truthy_str(s),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// String form of [`truthy`]: false for `""` and `"0"`
pub fn truthy_str(s: &str) -> bool {
    !s.is_empty() && s != "0"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_is_list() {
        assert!(is_list(&json!([])));
        assert!(is_list(&json!([1, "two", null])));
        assert!(is_list(&json!({})));
        assert!(!is_list(&json!({"0": 1})));
        assert!(!is_list(&json!({"a": 1})));
        assert!(!is_list(&json!("list")));
        assert!(!is_list(&json!(null)));
    }

    #[test]
    fn test_flatten_list_values() {
        let pairs = flatten(&obj(json!({"a": [1, 2]})));
        assert_eq!(
            pairs,
            vec![("a[0]".to_string(), json!(1)), ("a[1]".to_string(), json!(2))]
        );
    }

    #[test]
    fn test_flatten_nested_maps_keep_order() {
        let pairs = flatten(&obj(json!({
            "amount": 500000,
            "account": {"order_id": 1, "phone": "998901234567"},
            "save": true
        })));

        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["amount", "account[order_id]", "account[phone]", "save"]);
        assert_eq!(pairs[3].1, json!(true));
    }

    #[test]
    fn test_flatten_maps_inside_lists() {
        let pairs = flatten(&obj(json!({
            "items": [{"title": "Tea", "count": 2}, {"title": "Cup", "count": 1}]
        })));

        assert_eq!(
            pairs,
            vec![
                ("items[0][title]".to_string(), json!("Tea")),
                ("items[0][count]".to_string(), json!(2)),
                ("items[1][title]".to_string(), json!("Cup")),
                ("items[1][count]".to_string(), json!(1)),
            ]
        );
    }

    #[test]
    fn test_flatten_nested_list_reuses_outer_key() {
        let pairs = flatten(&obj(json!({"a": [[1, 2]]})));
        assert_eq!(
            pairs,
            vec![("a[0]".to_string(), json!(1)), ("a[1]".to_string(), json!(2))]
        );
    }

    #[test]
    fn test_flatten_empty_containers_vanish() {
        assert!(flatten(&obj(json!({"a": []}))).is_empty());
        assert!(flatten(&obj(json!({"a": {}}))).is_empty());
        assert!(flatten(&obj(json!({"a": [[], {}]}))).is_empty());
    }

    #[test]
    fn test_flatten_keeps_null_scalars() {
        let pairs = flatten(&obj(json!({"note": null})));
        assert_eq!(pairs, vec![("note".to_string(), Value::Null)]);
    }

    #[test]
    fn test_rebuild_list_becomes_map() {
        let rebuilt = rebuild(vec![("a[0]", json!(1)), ("a[1]", json!(2))]);
        assert_eq!(Value::Object(rebuilt), json!({"a": {"0": 1, "1": 2}}));
    }

    #[test]
    fn test_rebuild_inverts_flatten_for_maps() {
        let original = obj(json!({
            "id": "63f1c9",
            "account": {"order_id": 1, "user": {"phone": "998901234567", "vip": false}},
            "amount": 500000
        }));

        assert_eq!(rebuild(flatten(&original)), original);
    }

    #[test]
    fn test_rebuild_overwrites_scalar_with_map() {
        let rebuilt = rebuild(vec![("a", json!(5)), ("a[b]", json!(6))]);
        assert_eq!(Value::Object(rebuilt), json!({"a": {"b": 6}}));
    }

    #[test]
    fn test_rebuild_later_pairs_win() {
        let rebuilt = rebuild(vec![("a[b]", json!(1)), ("a[b]", json!(2))]);
        assert_eq!(Value::Object(rebuilt), json!({"a": {"b": 2}}));
    }

    #[test]
    fn test_rebuild_empty_brackets() {
        let rebuilt = rebuild(vec![("tags[]", json!("x"))]);
        assert_eq!(Value::Object(rebuilt), json!({"tags": {"": "x"}}));
    }

    #[test]
    fn test_encode_parameters() {
        let encoded = encode_parameters(&obj(json!({
            "account": {"order_id": 7},
            "description": "Tea & cups",
            "save": true,
            "hold": false,
            "items": [10, 20]
        })));

        assert_eq!(
            encoded,
            "account[order_id]=7&description=Tea+%26+cups&save=1&hold=&items[0]=10&items[1]=20"
        );
    }

    #[test]
    fn test_url_encode_keeps_brackets() {
        assert_eq!(url_encode("a[b][0]"), "a[b][0]");
        assert_eq!(url_encode("a b/c"), "a+b%2Fc");
    }

    #[test]
    fn test_normalize_id() {
        let (id, rest) = normalize_id(json!({"id": "r-1", "expand": "card"}));
        assert_eq!(id, Some(json!("r-1")));
        assert_eq!(Value::Object(rest), json!({"expand": "card"}));

        let (id, rest) = normalize_id(json!({"expand": "card"}));
        assert_eq!(id, None);
        assert_eq!(Value::Object(rest), json!({"expand": "card"}));

        let (id, rest) = normalize_id(json!("r-2"));
        assert_eq!(id, Some(json!("r-2")));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_truthy() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!("0"), json!([]), json!({})] {
            assert!(!truthy(&falsy), "{} should be falsy", falsy);
        }
        for value in [json!(true), json!(1), json!(-3), json!("a"), json!("00"), json!([0]), json!({"k": null})] {
            assert!(truthy(&value), "{} should be truthy", value);
        }
    }
}
