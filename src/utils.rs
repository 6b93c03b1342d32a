// Display formatting helpers

/// Shown wherever a numeric figure is missing.
pub const PLACEHOLDER: &str = "—";

/// `"stainless_steel"` -> `"Stainless Steel"`; missing or blank -> `"Unknown"`.
pub fn humanize(value: Option<&str>) -> String {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "Unknown".to_string();
    };

    value
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// Integral values print without decimals, others with at most two.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_enum_like_strings() {
        assert_eq!(humanize(Some("stainless_steel")), "Stainless Steel");
        assert_eq!(humanize(Some("micom")), "Micom");
        assert_eq!(humanize(Some("induction_heating_pressure")), "Induction Heating Pressure");
        assert_eq!(humanize(Some("")), "Unknown");
        assert_eq!(humanize(None), "Unknown");
    }

    #[test]
    fn numbers_drop_needless_decimals() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(5.5), "5.5");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(1.333), "1.33");
        assert_eq!(format_number(2.999), "3");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn booleans_render_as_words() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
