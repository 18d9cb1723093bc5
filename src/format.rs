//! Display formatting for amounts, rates and durations.

/// US-dollar style: `$1,234.56`, `-$12.00`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }

    let cents = format!("{:.2}", amount.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // -0.001 rounds to $0.00, not -$0.00
    let sign = if amount < 0. && cents != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// `30 months (2 years)`, years rounded down.
pub fn format_duration(months: u32) -> String {
    format!("{} months ({} years)", months, months / 12)
}

#[cfg(test)]
mod tests {
    use super::{format_currency, format_duration, format_percent};
    use test_log::test;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.), "$0.00");
        assert_eq!(format_currency(5.), "$5.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1282.351148), "$1,282.35");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-12.), "-$12.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(18.99), "18.99%");
        assert_eq!(format_percent(5.), "5.00%");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0 months (0 years)");
        assert_eq!(format_duration(11), "11 months (0 years)");
        assert_eq!(format_duration(30), "30 months (2 years)");
    }
}
