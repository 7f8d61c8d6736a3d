//! Document number generation
//!
//! Numbers follow the `<PREFIX>#<5-digit>` format, e.g. `INV#48213` or
//! `QT#10007`. The five digits are drawn from a freshly generated UUID so
//! no separate RNG dependency or counter state is needed; uniqueness is
//! best-effort, matching the original numbering scheme.

use uuid::Uuid;

/// Generate a document number with the given prefix
pub fn generate_document_number(prefix: &str) -> String {
    let bytes = Uuid::new_v4().into_bytes();
    let seed = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    // Map into the 5-digit range 10000..=99999
    let digits = 10000 + (seed % 90000);
    format!("{}#{}", prefix, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(number: &str, prefix: &str) {
        let rest = number
            .strip_prefix(prefix)
            .and_then(|s| s.strip_prefix('#'))
            .unwrap_or_else(|| panic!("number '{}' missing '{}#' prefix", number, prefix));
        assert_eq!(rest.len(), 5, "number '{}' must have 5 digits", number);
        let value: u32 = rest.parse().unwrap();
        assert!((10000..=99999).contains(&value));
    }

    #[test]
    fn test_invoice_number_format() {
        for _ in 0..100 {
            assert_well_formed(&generate_document_number("INV"), "INV");
        }
    }

    #[test]
    fn test_quote_number_format() {
        assert_well_formed(&generate_document_number("QT"), "QT");
    }
}
