/// Insert thousands separators into a string of ASCII digits
fn group_digits(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a number with thousands separators, keeping any fractional part
/// (e.g. 100000 -> "100,000", 1234.5 -> "1,234.5")
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let text = value.abs().to_string();
    match text.split_once('.') {
        Some((whole, fraction)) => format!("{sign}{}.{fraction}", group_digits(whole)),
        None => format!("{sign}{}", group_digits(&text)),
    }
}

/// Format a subject count rounded up to whole subjects (e.g. "106,364")
pub fn format_count(value: f64) -> String {
    format_grouped(value.ceil())
}

/// Format a rate as a percentage with one decimal (e.g. 0.03 -> "3.0%")
pub fn format_rate(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Format a percentage value
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(100_000.0), "100,000");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1_000.0), "1,000");
        assert_eq!(format_grouped(1_234_567.0), "1,234,567");
        assert_eq!(format_grouped(1_234.5), "1,234.5");
        assert_eq!(format_grouped(-50_000.0), "-50,000");
        assert_eq!(format_grouped(0.0), "0");
    }

    #[test]
    fn test_format_count_rounds_up() {
        assert_eq!(format_count(106_363.84), "106,364");
        assert_eq!(format_count(12.0), "12");
    }

    #[test]
    fn test_format_rates() {
        assert_eq!(format_rate(0.03), "3.0%");
        assert_eq!(format_rate(0.125), "12.5%");
        assert_eq!(format_percentage(0.0525), "5.25%");
    }
}
