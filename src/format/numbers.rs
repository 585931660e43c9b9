// Number formatting for human output

/// Format an unsigned count with thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let lead = match digits.len() % 3 {
        0 => 3,
        rem => rem,
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    out.push_str(&digits[..lead]);
    for group in digits.as_bytes()[lead..].chunks(3) {
        out.push(',');
        // digits are ASCII, so every chunk boundary is a char boundary
        out.extend(group.iter().map(|&byte| byte as char));
    }
    out
}

/// Format a population size (usize) with thousands separators.
#[inline]
pub fn format_usize(value: usize) -> String {
    format_count(value as u64)
}

/// Format milliseconds with three decimals and a unit.
pub fn format_ms(value: f64) -> String {
    format!("{value:.3} ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_count_with_commas() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(12), "12");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_usize(100000), "100,000");
    }

    #[test]
    fn formats_ms() {
        assert_eq!(format_ms(0.0031), "0.003 ms");
        assert_eq!(format_ms(12.5), "12.500 ms");
    }
}
