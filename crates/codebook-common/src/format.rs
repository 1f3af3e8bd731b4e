//! Number formatting for rendered tables.
//!
//! Counts and sums use thousands separators with no decimals, statistics use
//! thousands separators with a fixed number of decimals, and shares render as
//! two-decimal percentages.

/// Placeholder for a statistic that cannot be computed.
pub const NOT_AVAILABLE: &str = "NA";

/// Inserts `,` between every group of three digits of an unsigned digit string.
///
/// # Examples
///
/// ```
/// use codebook_common::group_thousands;
///
/// assert_eq!(group_thousands("999"), "999");
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Formats a count with thousands separators.
pub fn format_count(count: usize) -> String {
    group_thousands(&count.to_string())
}

/// Formats a number with thousands separators and `decimals` fixed decimals.
///
/// Non-finite input renders as [`NOT_AVAILABLE`].
///
/// # Examples
///
/// ```
/// use codebook_common::format_fixed;
///
/// assert_eq!(format_fixed(1234.5, 2), "1,234.50");
/// assert_eq!(format_fixed(-9876543.219, 2), "-9,876,543.22");
/// assert_eq!(format_fixed(1500.4, 0), "1,500");
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let magnitude = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match magnitude.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (magnitude.as_str(), None),
    };
    let is_zero = magnitude.chars().all(|ch| ch == '0' || ch == '.');
    let mut out = String::with_capacity(magnitude.len() + magnitude.len() / 3 + 1);
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Formats a fraction (0.25) as a two-decimal percentage ("25.00%").
pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "0.00%".to_string();
    }
    format!("{:.2}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("100000"), "100,000");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(12_345), "12,345");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(30.0, 2), "30.00");
        assert_eq!(format_fixed(0.0, 2), "0.00");
        assert_eq!(format_fixed(-0.001, 2), "0.00");
        assert_eq!(format_fixed(999.999, 2), "1,000.00");
        assert_eq!(format_fixed(f64::NAN, 2), NOT_AVAILABLE);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(2.0 / 3.0), "66.67%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(1.0), "100.00%");
    }
}
