//! Load/save contract between the editor and its backend.
//!
//! The wire format is JSON. [`handle_load`] answers `GET ?element_id=N`,
//! [`handle_save`] answers a `POST` body of `{element_id, content}`. Both
//! allow any origin; pre-flight requests get [`cors_headers`] and no body.

mod clean;
mod store;

pub use clean::server_clean_html;
pub use store::{ContentStore, MemoryStore, SaveAction, SaveOutcome, StoredContent};

use serde::{Deserialize, Serialize};

pub const INVALID_ELEMENT_ID: &str = "ID de l'élément manquant ou invalide";
pub const EMPTY_CONTENT: &str = "Contenu vide";
pub const INVALID_JSON: &str = "Données JSON invalides";
pub const NOT_FOUND_MESSAGE: &str = "Aucun contenu trouvé pour cet élément";
const LOAD_FAILED: &str = "Erreur lors de la requête";
const SAVE_FAILED: &str = "Erreur lors de l'enregistrement";

/// Response of the load endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LoadResponse {
    fn failure(error: &str, details: Option<String>) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            details,
            ..Self::default()
        }
    }
}

/// Body of a save request. `element_id` may be a number or a numeric
/// string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveRequest {
    #[serde(default)]
    pub element_id: serde_json::Value,
    #[serde(default)]
    pub content: Option<String>,
}

/// Response of the save endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<SaveAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SaveResponse {
    fn failure(error: &str, details: Option<String>) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            details,
            ..Self::default()
        }
    }
}

/// Headers sent with every response, including pre-flight
pub fn cors_headers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Content-Type", "application/json; charset=utf-8"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Methods", "POST, GET, OPTIONS"),
        ("Access-Control-Allow-Headers", "Content-Type"),
    ]
}

/// Leading integer of a string, like a lenient `atoi`; 0 if none.
/// Out-of-range values saturate at the `i64` bounds.
fn leading_int(value: &str) -> i64 {
    let value = value.trim_start();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |n, d| {
            let d = i64::from(d - b'0');
            if negative {
                n.saturating_mul(10).saturating_sub(d)
            } else {
                n.saturating_mul(10).saturating_add(d)
            }
        })
}

/// A positive element id, or None
fn element_id_from(value: &serde_json::Value) -> Option<u64> {
    let id = match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => leading_int(s),
        serde_json::Value::Bool(true) => 1,
        _ => 0,
    };
    u64::try_from(id).ok().filter(|&id| id > 0)
}

/// `element_id` from a query string such as `element_id=12&x=y`
fn element_id_from_query(query: &str) -> Option<u64> {
    let query = query.trim_start_matches('?');
    let raw = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "element_id")
        .map(|(_, value)| value)?;
    u64::try_from(leading_int(raw)).ok().filter(|&id| id > 0)
}

/// Answer a load request
pub fn handle_load(store: &dyn ContentStore, query: &str) -> LoadResponse {
    let Some(element_id) = element_id_from_query(query) else {
        return LoadResponse::failure(INVALID_ELEMENT_ID, None);
    };

    match store.load(element_id) {
        Ok(Some(record)) => LoadResponse {
            success: true,
            content_length: Some(record.content.len()),
            content: Some(record.content),
            exists: Some(true),
            created_at: Some(record.created_at),
            updated_at: Some(record.updated_at),
            ..LoadResponse::default()
        },
        Ok(None) => LoadResponse {
            success: true,
            content: Some(String::new()),
            exists: Some(false),
            message: Some(NOT_FOUND_MESSAGE.to_string()),
            ..LoadResponse::default()
        },
        Err(err) => {
            tracing::warn!(element_id, %err, "content load failed");
            LoadResponse::failure(LOAD_FAILED, Some(err.message().to_string()))
        }
    }
}

/// Answer a save request with a JSON `body`
pub fn handle_save(store: &mut dyn ContentStore, body: &str) -> SaveResponse {
    let request = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) if !map.is_empty() => {
            match serde_json::from_value::<SaveRequest>(serde_json::Value::Object(map)) {
                Ok(request) => request,
                Err(_) => return SaveResponse::failure(INVALID_JSON, None),
            }
        }
        _ => return SaveResponse::failure(INVALID_JSON, None),
    };

    let Some(element_id) = element_id_from(&request.element_id) else {
        return SaveResponse::failure(INVALID_ELEMENT_ID, None);
    };

    let content = request.content.as_deref().unwrap_or("").trim();
    if content.is_empty() {
        return SaveResponse::failure(EMPTY_CONTENT, None);
    }

    let content = server_clean_html(content);
    match store.save(element_id, &content) {
        Ok(outcome) => {
            tracing::info!(element_id, action = ?outcome.action, "content saved");
            SaveResponse {
                success: true,
                action: Some(outcome.action),
                element_id: Some(element_id),
                id: Some(outcome.id),
                content_length: Some(content.len()),
                ..SaveResponse::default()
            }
        }
        Err(err) => {
            tracing::warn!(element_id, %err, "content save failed");
            SaveResponse::failure(SAVE_FAILED, Some(err.message().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("12"), 12);
        assert_eq!(leading_int(" 7abc"), 7);
        assert_eq!(leading_int("-3"), -3);
        assert_eq!(leading_int("abc"), 0);
        assert_eq!(leading_int(""), 0);
        assert_eq!(leading_int("99999999999999999999"), i64::MAX);
        assert_eq!(leading_int("-99999999999999999999"), i64::MIN);
    }

    #[test]
    fn test_huge_element_id_saturates() {
        assert_eq!(
            element_id_from_query("element_id=99999999999999999999"),
            Some(i64::MAX as u64)
        );
    }

    #[test]
    fn test_element_id_from_query() {
        assert_eq!(element_id_from_query("element_id=5"), Some(5));
        assert_eq!(element_id_from_query("?a=b&element_id=9"), Some(9));
        assert_eq!(element_id_from_query("element_id=0"), None);
        assert_eq!(element_id_from_query("element_id=-2"), None);
        assert_eq!(element_id_from_query(""), None);
    }

    #[test]
    fn test_element_id_from_json_value() {
        assert_eq!(element_id_from(&serde_json::json!(4)), Some(4));
        assert_eq!(element_id_from(&serde_json::json!("4")), Some(4));
        assert_eq!(element_id_from(&serde_json::json!(null)), None);
        assert_eq!(element_id_from(&serde_json::json!(-1)), None);
    }

    #[test]
    fn test_failure_omits_empty_fields() {
        let json = serde_json::to_string(&LoadResponse::failure(INVALID_ELEMENT_ID, None)).unwrap();
        assert_eq!(
            json,
            "{\"success\":false,\"error\":\"ID de l'élément manquant ou invalide\"}"
        );
    }
}
