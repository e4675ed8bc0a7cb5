//! Price Formatting
//!
//! Stripe reports amounts in minor units (centavos). The storefront sells
//! in Brazilian Real, so formatting follows pt-BR conventions: "." for
//! thousands, "," for decimals.

/// Format a minor-unit amount as Brazilian Real (e.g. 7990 -> "R$ 79,90")
pub fn format_brl(minor_units: i64) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();
    let reais = group_thousands(abs / 100);
    let centavos = abs % 100;
    format!("R$ {sign}{reais},{centavos:02}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(7990), "R$ 79,90");
        assert_eq!(format_brl(8490), "R$ 84,90");
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(5), "R$ 0,05");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_brl(100_000), "R$ 1.000,00");
        assert_eq!(format_brl(123_456_789), "R$ 1.234.567,89");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_brl(-7990), "R$ -79,90");
    }
}
