//! Price formatting

/// First line of every result
pub const RESULT_HEADING: &str = "Estimated House Price:";

/// Format number with thousand separators
pub fn format_number(n: u64) -> String {
    group_digits(&n.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Whole currency amount, truncated toward zero, e.g. `₹6,834,090`
///
/// Negative estimates keep their sign after the symbol (`₹-1,234`). Every
/// integer digit is printed, however large the amount. Callers reject
/// non-finite prices before formatting.
pub fn format_price(currency_symbol: &str, price: f64) -> String {
    let whole = price.trunc();
    let sign = if whole < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", whole.abs());
    format!("{}{}{}", currency_symbol, sign, group_digits(&digits))
}

/// Text of the result panel
pub fn format_result(currency_symbol: &str, price: f64) -> String {
    format!("{}\n{}", RESULT_HEADING, format_price(currency_symbol, price))
}
