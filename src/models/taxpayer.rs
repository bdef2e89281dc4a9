use serde::Serialize;

/// A single taxpayer entry in the bundled demo dataset.
///
/// Records are compiled into the binary and never mutated; the RUC is
/// unique within the dataset.
#[derive(Debug, Clone, Serialize)]
pub struct TaxpayerRecord {
    #[serde(rename = "razonSocial")]
    pub razon_social: &'static str,
    pub ruc: &'static str,
    pub estado: &'static str,
    pub condicion: &'static str,
    pub direccion: &'static str,
}
