//! Upstream RUC Registry Client
//!
//! Queries the apis.net.pe public API, which resolves a RUC against the
//! SUNAT taxpayer registry. Availability, rate limits, and the exact
//! response schema are outside this service's control, so every field
//! is treated as optional.

use reqwest::{header, StatusCode};
use serde::Deserialize;

/// Source label stamped on every successful lookup response.
pub const FUENTE: &str = "api.apis.net.pe";

/// Raw payload returned by the upstream registry. Untrusted/partial
/// input: any field may be missing, and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SunatRucPayload {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub condicion: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub ubigeo: Option<String>,
    #[serde(default)]
    pub distrito: Option<String>,
    #[serde(default)]
    pub provincia: Option<String>,
    #[serde(default)]
    pub departamento: Option<String>,
}

/// Error type for upstream registry operations.
#[derive(Debug, thiserror::Error)]
pub enum SunatError {
    #[error("HTTP request to registry failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("registry returned HTTP {status}")]
    Status { status: StatusCode, body: String },
}

/// Client for the apis.net.pe RUC registry.
pub struct SunatClient {
    http: reqwest::Client,
    base_url: String,
}

impl SunatClient {
    pub fn new(base_url: &str) -> Result<Self, SunatError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ruc-lookup/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue a single lookup for an already-validated 11-digit RUC.
    ///
    /// Non-success upstream statuses are captured with their body for
    /// diagnostic logging by the caller; transport and JSON decode
    /// failures surface as [`SunatError::Http`].
    pub async fn lookup_ruc(&self, ruc: &str) -> Result<SunatRucPayload, SunatError> {
        let url = format!("{}/ruc?numero={}", self.base_url, ruc);

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SunatError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_fields_default_to_none() {
        let payload: SunatRucPayload =
            serde_json::from_str(r#"{"nombre":"ACME S.A."}"#).unwrap();
        assert_eq!(payload.nombre.as_deref(), Some("ACME S.A."));
        assert_eq!(payload.estado, None);
        assert_eq!(payload.departamento, None);
    }

    #[test]
    fn payload_ignores_unknown_fields() {
        let payload: SunatRucPayload = serde_json::from_str(
            r#"{"nombre":"ACME S.A.","tipoDocumento":"6","numeroDocumento":"20100039207"}"#,
        )
        .unwrap();
        assert_eq!(payload.nombre.as_deref(), Some("ACME S.A."));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = SunatClient::new("https://api.apis.net.pe/v1/").unwrap();
        assert_eq!(client.base_url, "https://api.apis.net.pe/v1");
    }
}
