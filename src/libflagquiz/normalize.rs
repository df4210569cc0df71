use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Removes diacritics: "Curaçao" becomes "Curacao".
pub fn deburr(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Trims, lowercases and strips diacritics so free-text answers compare loosely.
pub fn normalize(s: &str) -> String {
    deburr(&s.to_lowercase()).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_case_space_and_accents() {
        assert_eq!(normalize("  Côte d'Ivoire "), "cote d'ivoire");
        assert_eq!(normalize("SÃO TOMÉ"), "sao tome");
        assert_eq!(normalize("Türkiye"), "turkiye");
    }

    #[test]
    fn idempotent() {
        for s in ["  Réunion", "ÅLAND", "🇫🇷", "", "Bosnia and Herzegovina\t", "İstanbul"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "{s:?}");
        }
    }

    #[test]
    fn leaves_flags_alone() {
        assert_eq!(deburr("🇫🇷"), "🇫🇷");
    }
}
