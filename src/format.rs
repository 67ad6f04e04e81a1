use num_format::{Locale, ToFormattedString};

/// Insert thousands separators into a numeric string.
///
/// Non-numeric input passes through unchanged. For numeric input the
/// integer part is comma-grouped and the fractional digits (if any) are
/// kept verbatim after a single `.`.
pub fn thousands(value: &str) -> String {
    if value.parse::<f64>().is_err() {
        return value.to_string();
    }
    let (int_part, frac_part) = match value.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (value, None),
    };
    let grouped = group_digits(int_part);
    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

/// Group an integer string; parts that don't fit an integer (exponent
/// notation, infinities) pass through as-is.
fn group_digits(int_part: &str) -> String {
    match int_part.parse::<i128>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        Err(_) => int_part.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_and_passes_through() {
        assert_eq!(thousands("1234567"), "1,234,567");
        assert_eq!(thousands("1234.5678"), "1,234.5678");
        assert_eq!(thousands("-1234567"), "-1,234,567");
        assert_eq!(thousands("n/a"), "n/a");
        assert_eq!(thousands(""), "");
    }

    #[test]
    fn exponent_form_is_not_grouped() {
        assert_eq!(thousands("1e6"), "1e6");
    }
}
