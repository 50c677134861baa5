//! Last-modification date normalization.

use chrono::NaiveDate;

/// Date format required for `<lastmod>` values (`YYYY-MM-DD`).
pub const LASTMOD_FORMAT: &str = "%Y-%m-%d";

/// Normalizes a raw `lastmod` value against [`LASTMOD_FORMAT`].
///
/// Values that parse are kept verbatim. Anything else, including the empty
/// string, is replaced with `today` in the same format; bad input is masked,
/// never rejected.
pub(crate) fn normalize_lastmod(raw: &str, today: NaiveDate) -> String {
    match NaiveDate::parse_from_str(raw, LASTMOD_FORMAT) {
        Ok(_) => raw.to_string(),
        Err(_) => today.format(LASTMOD_FORMAT).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 19).unwrap()
    }

    #[test]
    fn test_valid_date_kept_verbatim() {
        assert_eq!(normalize_lastmod("2023-10-25", fixed_today()), "2023-10-25");
    }

    #[test]
    fn test_malformed_date_replaced() {
        assert_eq!(normalize_lastmod("invalid-date", fixed_today()), "2026-02-19");
        assert_eq!(normalize_lastmod("2023-13-99", fixed_today()), "2026-02-19");
        assert_eq!(normalize_lastmod("25/10/2023", fixed_today()), "2026-02-19");
    }

    #[test]
    fn test_empty_date_replaced() {
        assert_eq!(normalize_lastmod("", fixed_today()), "2026-02-19");
    }

    #[test]
    fn test_deterministic_for_fixed_today() {
        let a = normalize_lastmod("nope", fixed_today());
        let b = normalize_lastmod("nope", fixed_today());
        assert_eq!(a, b);
    }
}
