//! Display formatting helpers.
//!
//! Amounts are formatted for display only; the server stays authoritative.

/// Currency prefix shown before amounts
pub const CURRENCY_PREFIX: &str = "Rp";

/// Group the digits of an integer with `,` every three places.
///
/// ```
/// use stockroom::utils::format::group_digits;
/// assert_eq!(group_digits(1_234_567), "1,234,567");
/// assert_eq!(group_digits(-1500), "-1,500");
/// ```
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an amount as a rounded, digit-grouped currency string (`Rp 1,500`).
pub fn format_currency(amount: f64) -> String {
    format!("{} {}", CURRENCY_PREFIX, group_digits(amount.round() as i64))
}

/// Format a price for an input field: whole numbers drop the fraction.
pub fn format_price_input(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        price.to_string()
    }
}

/// Up to two uppercase initials from a display name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Truncate `text` to `max_chars` characters, appending `...` when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_small_numbers_without_separator() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
    }

    #[test]
    fn currency_rounds_fractions() {
        assert_eq!(format_currency(1500.0), "Rp 1,500");
        assert_eq!(format_currency(1499.6), "Rp 1,500");
        assert_eq!(format_currency(0.0), "Rp 0");
    }

    #[test]
    fn price_input_drops_whole_fraction() {
        assert_eq!(format_price_input(2500.0), "2500");
        assert_eq!(format_price_input(2500.5), "2500.5");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("jane mary doe"), "JM");
        assert_eq!(initials("Admin"), "A");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Pen", 10), "Pen");
        assert_eq!(truncate("Fountain pen deluxe", 10), "Fountai...");
    }
}
