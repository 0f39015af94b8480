//! Seam for translated strings and locale-aware numbers. Catalog loading
//! lives with the host application; [`EnglishCatalog`] is the built-in
//! untranslated fallback.

pub trait MessageCatalog {
    fn gettext(&self, message: &str) -> String;

    /// Picks `singular` or `plural` for `count`.
    fn ngettext(&self, singular: &str, plural: &str, count: f64) -> String;

    fn format_number(&self, value: f64) -> String;
}

/// Untranslated English with `1,234.5` style numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {
    fn gettext(&self, message: &str) -> String {
        message.to_string()
    }

    fn ngettext(&self, singular: &str, plural: &str, count: f64) -> String {
        if count == 1.0 { singular.to_string() } else { plural.to_string() }
    }

    fn format_number(&self, value: f64) -> String {
        // At most three fraction digits, trailing zeros dropped.
        let fixed = format!("{:.3}", value.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) { "-" } else { "" };
        if frac_part.is_empty() {
            format!("{sign}{grouped}")
        } else {
            format!("{sign}{grouped}.{frac_part}")
        }
    }
}

/// Fills `%(name)s` placeholders.
pub fn sprintf(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("%({name})s"), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping() {
        let catalog = EnglishCatalog;
        assert_eq!(catalog.format_number(0.0), "0");
        assert_eq!(catalog.format_number(999.0), "999");
        assert_eq!(catalog.format_number(1000.0), "1,000");
        assert_eq!(catalog.format_number(1234567.0), "1,234,567");
        assert_eq!(catalog.format_number(4.6), "4.6");
        assert_eq!(catalog.format_number(-1500.25), "-1,500.25");
    }

    #[test]
    fn plural_picks_form() {
        let catalog = EnglishCatalog;
        assert_eq!(catalog.ngettext("User", "Users", 1.0), "User");
        assert_eq!(catalog.ngettext("User", "Users", 2.0), "Users");
        assert_eq!(catalog.ngettext("Star", "Stars", 4.5), "Stars");
    }

    #[test]
    fn sprintf_replaces_named_placeholders() {
        assert_eq!(sprintf("%(total)s Stars", &[("total", "4.5")]), "4.5 Stars");
        assert_eq!(sprintf("no placeholders", &[("total", "1")]), "no placeholders");
    }
}
