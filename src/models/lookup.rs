use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::services::sunat::SunatRucPayload;

/// Normalized lookup query: the candidate RUC after trimming.
///
/// A RUC is valid only if it is exactly 11 decimal digits. The same
/// invariant is re-checked client-side in the page script before any
/// request is issued; both checks must agree.
#[derive(Debug, Validate)]
pub struct RucQuery {
    #[garde(length(chars, min = 11, max = 11), custom(all_decimal_digits))]
    pub ruc: String,
}

fn all_decimal_digits(value: &str, _context: &()) -> garde::Result {
    if value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(garde::Error::new("contains non-digit characters"))
    }
}

/// Successful lookup payload returned by `GET /api/ruc`.
///
/// Field names mirror the public JSON contract; every data field is
/// nullable because the upstream registry is treated as partial input.
#[derive(Debug, Serialize, Deserialize)]
pub struct RucLookupResponse {
    #[serde(rename = "razonSocial")]
    pub razon_social: Option<String>,
    pub estado: Option<String>,
    pub condicion: Option<String>,
    pub direccion: Option<String>,
    pub ubigeo: Option<String>,
    pub distrito: Option<String>,
    pub provincia: Option<String>,
    pub departamento: Option<String>,
    pub fuente: String,
    pub timestamp: DateTime<Utc>,
}

impl RucLookupResponse {
    /// Project an upstream payload onto the public shape, stamping the
    /// source label and the time this service built the response (not
    /// upstream's own timestamp).
    pub fn from_upstream(payload: SunatRucPayload) -> Self {
        Self {
            razon_social: payload.nombre,
            estado: payload.estado,
            condicion: payload.condicion,
            direccion: payload.direccion,
            ubigeo: payload.ubigeo,
            distrito: payload.distrito,
            provincia: payload.provincia,
            departamento: payload.departamento,
            fuente: crate::services::sunat::FUENTE.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Structured error body shared by every failure path.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(ruc: &str) -> RucQuery {
        RucQuery {
            ruc: ruc.to_string(),
        }
    }

    #[test]
    fn valid_ruc_passes() {
        assert!(query("20100039207").validate().is_ok());
    }

    #[test]
    fn short_ruc_fails() {
        assert!(query("123").validate().is_err());
    }

    #[test]
    fn long_ruc_fails() {
        assert!(query("201000392071").validate().is_err());
    }

    #[test]
    fn non_digit_ruc_fails() {
        assert!(query("2010003920a").validate().is_err());
        assert!(query("20100-39207").validate().is_err());
    }

    #[test]
    fn empty_ruc_fails() {
        assert!(query("").validate().is_err());
    }

    #[test]
    fn response_uses_public_field_names() {
        let body = RucLookupResponse {
            razon_social: Some("ACME S.A.".to_string()),
            estado: None,
            condicion: None,
            direccion: None,
            ubigeo: None,
            distrito: None,
            provincia: None,
            departamento: None,
            fuente: "api.apis.net.pe".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["razonSocial"], "ACME S.A.");
        assert!(json["estado"].is_null());
        assert_eq!(json["fuente"], "api.apis.net.pe");
        assert!(json["timestamp"].is_string());
    }
}
