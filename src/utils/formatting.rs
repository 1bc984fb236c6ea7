//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Whole rupees with Indian digit grouping: `125000` → "₹1,25,000".
pub fn rupees(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (a, b) = rest.split_at(rest.len() - 2);
            parts.push(b);
            rest = a;
        }
        if !rest.is_empty() {
            parts.push(rest);
        }
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };

    format!("{}₹{}", sign, grouped)
}

/// Decimal quantity with up to two decimals, trailing zeros dropped.
pub fn quantity(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Empty text shown as a dash.
pub fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}
