//! Razón-social matching over the bundled sample dataset.

use crate::models::taxpayer::TaxpayerRecord;

/// Maximum number of matches returned, regardless of how many records
/// contain the query.
pub const MAX_MATCHES: usize = 10;

/// Case-insensitive substring match of `query` against each record's
/// razón social, preserving dataset order.
///
/// An empty (or all-whitespace) query yields no matches, so callers
/// can distinguish "not yet searched" from "searched, zero results".
/// Pure and synchronous; recomputed fully on every call.
pub fn search_by_name<'a>(
    records: &'a [TaxpayerRecord],
    query: &str,
) -> Vec<&'a TaxpayerRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| record.razon_social.to_lowercase().contains(&needle))
        .take(MAX_MATCHES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SAMPLE_RECORDS;

    #[test]
    fn match_is_case_insensitive() {
        let matches = search_by_name(SAMPLE_RECORDS, "RANSA");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].razon_social, "Ransa Comercial S.A.");

        let matches = search_by_name(SAMPLE_RECORDS, "ransa");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].razon_social, "Ransa Comercial S.A.");
    }

    #[test]
    fn empty_query_yields_no_matches() {
        assert!(search_by_name(SAMPLE_RECORDS, "").is_empty());
        assert!(search_by_name(SAMPLE_RECORDS, "   ").is_empty());
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let matches = search_by_name(SAMPLE_RECORDS, "  gloria  ");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].razon_social, "Gloria S.A.");
    }

    #[test]
    fn unknown_name_yields_no_matches() {
        assert!(search_by_name(SAMPLE_RECORDS, "zzz no existe").is_empty());
    }

    #[test]
    fn result_count_is_capped() {
        // Every record in the sample dataset contains "S.A." in some
        // casing, which is more than the cap.
        let matches = search_by_name(SAMPLE_RECORDS, "s.a.");
        assert_eq!(matches.len(), MAX_MATCHES);
    }

    #[test]
    fn dataset_order_is_preserved() {
        let matches = search_by_name(SAMPLE_RECORDS, "banco");
        let names: Vec<_> = matches.iter().map(|r| r.razon_social).collect();
        assert_eq!(
            names,
            vec![
                "Banco de Crédito del Perú S.A.",
                "Banco Internacional del Perú S.A.A. - Interbank",
            ]
        );
    }
}
