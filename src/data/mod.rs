//! Bundled sample dataset for the local razón-social matching demo.
//!
//! A small, representative subset of public SUNAT registry data. Demo
//! use only; production deployments should plug in the full padrón
//! reducido or a commercial API instead.

use crate::models::taxpayer::TaxpayerRecord;

pub static SAMPLE_RECORDS: &[TaxpayerRecord] = &[
    TaxpayerRecord {
        razon_social: "Ransa Comercial S.A.",
        ruc: "20100039207",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Av. Argentina 2833, Callao",
    },
    TaxpayerRecord {
        razon_social: "Alicorp S.A.A.",
        ruc: "20100055237",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Av. Argentina 4793, Carmen de la Legua Reynoso, Callao",
    },
    TaxpayerRecord {
        razon_social: "Gloria S.A.",
        ruc: "20100190797",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Av. República de Panamá 2461, La Victoria, Lima",
    },
    TaxpayerRecord {
        razon_social: "Unión de Cervecerías Peruanas Backus y Johnston S.A.A.",
        ruc: "20100113610",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Av. Nicolás Ayllón 3986, Ate, Lima",
    },
    TaxpayerRecord {
        razon_social: "Ferreycorp S.A.A.",
        ruc: "20100027292",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Jr. Cristóbal de Peralta Norte 820, Surco, Lima",
    },
    TaxpayerRecord {
        razon_social: "Cementos Pacasmayo S.A.A.",
        ruc: "20419387658",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Calle La Colonia 150, Santiago de Surco, Lima",
    },
    TaxpayerRecord {
        razon_social: "Banco de Crédito del Perú S.A.",
        ruc: "20100047218",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Calle Centenario 156, La Molina, Lima",
    },
    TaxpayerRecord {
        razon_social: "Banco Internacional del Perú S.A.A. - Interbank",
        ruc: "20100053455",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Av. Carlos Villarán 140, La Victoria, Lima",
    },
    TaxpayerRecord {
        razon_social: "Supermercados Peruanos S.A.",
        ruc: "20100070970",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Calle Morelli 181, San Borja, Lima",
    },
    TaxpayerRecord {
        razon_social: "Telefónica del Perú S.A.A.",
        ruc: "20100017491",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Av. Arequipa 1155, Santa Beatriz, Lima",
    },
    TaxpayerRecord {
        razon_social: "Corporación Aceros Arequipa S.A.",
        ruc: "20370146994",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Av. Enrique Meiggs 297, Carmen de la Legua Reynoso, Callao",
    },
    TaxpayerRecord {
        razon_social: "Compañía Minera Antamina S.A.",
        ruc: "20330262428",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Av. El Derby 055, Santiago de Surco, Lima",
    },
    TaxpayerRecord {
        razon_social: "Cencosud Retail Perú S.A.",
        ruc: "20109072177",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Calle Augusto Angulo 130, Miraflores, Lima",
    },
    TaxpayerRecord {
        razon_social: "Sociedad Minera Cerro Verde S.A.A.",
        ruc: "20170072465",
        estado: "ACTIVO",
        condicion: "HABIDO",
        direccion: "Asiento Minero Cerro Verde s/n, Uchumayo, Arequipa",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rucs_are_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for record in SAMPLE_RECORDS {
            assert_eq!(record.ruc.len(), 11, "{}", record.razon_social);
            assert!(record.ruc.bytes().all(|b| b.is_ascii_digit()));
            assert!(seen.insert(record.ruc), "duplicate RUC {}", record.ruc);
        }
    }

    #[test]
    fn dataset_exceeds_result_cap_for_common_substring() {
        // "s.a." appears in every razón social, so the 10-result cap
        // is observable against the bundled data.
        let matches = SAMPLE_RECORDS
            .iter()
            .filter(|r| r.razon_social.to_lowercase().contains("s.a."))
            .count();
        assert!(matches > 10);
    }
}
