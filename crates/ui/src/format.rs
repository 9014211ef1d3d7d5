//! Number formatting for counters and rates.

/// `1234567` -> `"1,234,567"`.
pub fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Daily totals are whole numbers in the catalog; fractional input rounds.
pub fn daily_total(daily_rate: f64) -> String {
    with_thousands(daily_rate.max(0.0).round() as u64)
}

/// `"+0.567/s"` as shown under each item's count.
pub fn rate_badge(rate_per_second: f64) -> String {
    format!("+{rate_per_second:.3}/s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1_000), "1,000");
        assert_eq!(with_thousands(49_000), "49,000");
        assert_eq!(with_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_daily_total() {
        assert_eq!(daily_total(49_000.0), "49,000");
        assert_eq!(daily_total(-3.0), "0");
    }

    #[test]
    fn test_rate_badge() {
        assert_eq!(rate_badge(49_000.0 / 86_400.0), "+0.567/s");
        assert_eq!(rate_badge(30.0 / 86_400.0), "+0.000/s");
    }
}
