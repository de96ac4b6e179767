//! The `{ok, data|error}` wrapper returned by every weather endpoint

use serde::Serialize;
use serde_json::Value;

use super::location::Location;

pub const CITY_NOT_FOUND: &str = "City not found";
pub const CITY_NOT_FOUND_HINT: &str = "Use /api/locations to see options";

/// Weather response envelope. The upstream payload in `data` is passed
/// through untouched.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WeatherEnvelope {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl WeatherEnvelope {
    #[must_use]
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            location: None,
            data: Some(data),
            error: None,
            hint: None,
        }
    }

    #[must_use]
    pub fn located(location: Location, data: Value) -> Self {
        Self {
            location: Some(location),
            ..Self::success(data)
        }
    }

    #[must_use]
    pub fn failure<S: Into<String>>(error: S) -> Self {
        Self {
            ok: false,
            location: None,
            data: None,
            error: Some(error.into()),
            hint: None,
        }
    }

    #[must_use]
    pub fn city_not_found() -> Self {
        Self {
            hint: Some(CITY_NOT_FOUND_HINT.to_string()),
            ..Self::failure(CITY_NOT_FOUND)
        }
    }

    /// Wrap an upstream result, rendering the whole error chain as the message
    #[must_use]
    pub fn from_upstream(result: anyhow::Result<Value>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(format!("{err:#}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::LOCATIONS;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let body = json!({"current": {"temperature_2m": 24.1}});
        let value = serde_json::to_value(WeatherEnvelope::success(body.clone())).unwrap();
        assert_eq!(value, json!({"ok": true, "data": body}));
    }

    #[test]
    fn test_located_key_order() {
        let envelope = WeatherEnvelope::located(LOCATIONS[0], json!({}));
        let text = serde_json::to_string(&envelope).unwrap();
        assert!(text.starts_with(r#"{"ok":true,"location":{"name":"San José""#));
        assert!(text.ends_with(r#""data":{}}"#));
    }

    #[test]
    fn test_city_not_found_shape() {
        let value = serde_json::to_value(WeatherEnvelope::city_not_found()).unwrap();
        assert_eq!(
            value,
            json!({
                "ok": false,
                "error": "City not found",
                "hint": "Use /api/locations to see options"
            })
        );
    }

    #[test]
    fn test_from_upstream_error_keeps_context_chain() {
        let err = anyhow::anyhow!("operation timed out").context("forecast request failed");
        let envelope = WeatherEnvelope::from_upstream(Err(err));
        assert!(!envelope.ok);
        assert_eq!(
            envelope.error.as_deref(),
            Some("forecast request failed: operation timed out")
        );
    }
}
