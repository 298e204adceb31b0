// Helper to add thousands separators to a string of digits
fn add_thousands_separators(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().rev().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result.chars().rev().collect()
}

/// Format a number with thousands separators, at most `max_decimals` decimals, trailing zeros stripped
///
/// Examples: 130000.0 -> "130,000", 12.5 -> "12.5", 12.567 (2 decimals) -> "12.57"
pub fn format_number(value: f64, max_decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞".to_string() } else { "-∞".to_string() };
    }

    let fixed = format!("{:.*}", max_decimals, value);
    let (integer_part, decimal_part) = match fixed.split_once('.') {
        Some((integer, decimals)) => (integer, decimals.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };
    let grouped = add_thousands_separators(digits);

    // Rounding can leave "-0"
    let sign = if grouped == "0" && decimal_part.is_empty() { "" } else { sign };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}
