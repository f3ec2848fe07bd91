//! Length conversion between CSS pixels and the target notations.
//!
//! Android dimensions are `<n>dp` / `<n>sp` strings; Compose dimensions are
//! `<n>.dp` / `<n>.sp` expressions. Conversions are by numeric identity
//! (`16px` becomes `16dp`), which is the convention design handoffs use.
//! Every function here is total: input that is not a convertible length
//! passes through unchanged.

/// Density-independent or scale-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Layout dimension.
    Dp,
    /// Font dimension.
    Sp,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Dp => "dp",
            Unit::Sp => "sp",
        }
    }
}

/// The numeric part of a `px` length. `None` for any other unit, so callers
/// can tell `12px` apart from `12em` or a bare `1.5`.
pub fn px_of(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

/// Converts a CSS length to an Android dimension string.
///
/// Percentages pass through for the caller to map onto `match_parent` rules;
/// unparseable values pass through untouched.
pub fn to_android(value: &str, unit: Unit) -> String {
    let value = value.trim();
    if value.ends_with('%') {
        return value.to_string();
    }
    match leading_number(value) {
        Some(n) => format!("{}{}", format_number(n), unit.suffix()),
        None => value.to_string(),
    }
}

/// Converts a CSS length to a Compose dimension expression (`16px` -> `16.dp`).
pub fn to_compose(value: &str, unit: Unit) -> String {
    let value = value.trim();
    if value.ends_with('%') {
        return value.to_string();
    }
    match leading_number(value) {
        Some(n) => format!("{}.{}", format_number(n), unit.suffix()),
        None => value.to_string(),
    }
}

/// Rewrites an already-converted Android dimension into Compose dot syntax
/// (`12dp` -> `12.dp`). Keywords such as `match_parent` pass through.
pub fn dimension_to_compose(dimension: &str) -> String {
    let dimension = dimension.trim();
    for suffix in ["dp", "sp"] {
        if let Some(number) = dimension.strip_suffix(suffix) {
            if number.parse::<f64>().is_ok() {
                return format!("{}.{}", number, suffix);
            }
        }
    }
    dimension.to_string()
}

/// Formats a number the way web tooling prints it: no trailing `.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Leading numeric prefix, mirroring how browsers read `12px` or `12em`
/// as the number twelve. `None` when the value does not start with a number.
fn leading_number(value: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, ch) in value.char_indices() {
        match ch {
            '+' | '-' if i == 0 => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    value[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_lengths_convert_by_identity() {
        assert_eq!(to_android("16px", Unit::Dp), "16dp");
        assert_eq!(to_android("14px", Unit::Sp), "14sp");
        assert_eq!(to_android("1.5px", Unit::Dp), "1.5dp");
        assert_eq!(to_android("-4px", Unit::Dp), "-4dp");
    }

    #[test]
    fn percent_and_keywords_pass_through() {
        assert_eq!(to_android("100%", Unit::Dp), "100%");
        assert_eq!(to_android("auto", Unit::Dp), "auto");
        assert_eq!(to_compose("100%", Unit::Dp), "100%");
    }

    #[test]
    fn compose_uses_dot_syntax() {
        assert_eq!(to_compose("16px", Unit::Dp), "16.dp");
        assert_eq!(to_compose("12px", Unit::Sp), "12.sp");
    }

    #[test]
    fn dimension_rewrite() {
        assert_eq!(dimension_to_compose("12dp"), "12.dp");
        assert_eq!(dimension_to_compose("14sp"), "14.sp");
        assert_eq!(dimension_to_compose("match_parent"), "match_parent");
    }

    #[test]
    fn px_of_requires_px() {
        assert_eq!(px_of("24px"), Some(24.0));
        assert_eq!(px_of("-0.5px"), Some(-0.5));
        assert_eq!(px_of("24em"), None);
        assert_eq!(px_of("1.5"), None);
    }

    #[test]
    fn numbers_print_without_trailing_zero() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-3.0), "-3");
    }
}
