//! Typed settings read from the environment (after [`load_and_apply`](crate::load_and_apply)).
//!
//! Unset or unparsable values fall back to defaults.

/// Port used when neither `RELATION_ADDR` nor a valid `PORT` is set.
pub const DEFAULT_PORT: u16 = 8080;
/// Service URL the client uses when `RELATION_URL` is unset.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8080";

/// Server settings.
///
/// - `RELATION_ADDR`: full listen address; otherwise `0.0.0.0:$PORT`.
/// - `PORT` (default 8080)
/// - `GEMINI_API_KEY`: provider credential (required to serve).
/// - `GEMINI_MODEL`, `GEMINI_BASE_URL`: provider overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServeSettings {
    pub addr: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_base_url: Option<String>,
}

impl ServeSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |k: &str| get(k).filter(|v| !v.trim().is_empty());
        let addr = non_empty("RELATION_ADDR").unwrap_or_else(|| {
            let port = get("PORT")
                .and_then(|p| p.trim().parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT);
            format!("0.0.0.0:{}", port)
        });
        Self {
            addr,
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            gemini_model: non_empty("GEMINI_MODEL"),
            gemini_base_url: non_empty("GEMINI_BASE_URL"),
        }
    }
}

/// Client settings. `RELATION_URL`: base URL of the relation service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
}

impl ClientSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: get("RELATION_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
        }
    }
}
