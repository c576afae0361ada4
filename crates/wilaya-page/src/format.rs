//! Number parsing and display
//!
//! Stat targets come out of markup, so they are parsed the way a browser's
//! `parseInt` reads them, and shown with en-US digit grouping.

/// Format an integer with `,` thousands separators (`1234567` → `1,234,567`)
pub fn format_grouped(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse the leading integer of `s`, like `parseInt(s)`.
///
/// Leading whitespace and a sign are accepted, a `0x` prefix switches to
/// hex, and parsing stops at the first non-digit (`"1,500"` is `1`).
/// Returns `None` when no digit was read. Values saturate at the `i64`
/// bounds.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    let mut read_any = false;
    for ch in digits.chars() {
        let Some(d) = ch.to_digit(radix) else {
            break;
        };
        read_any = true;
        value = value.saturating_mul(i64::from(radix)).saturating_add(i64::from(d));
    }

    if !read_any {
        return None;
    }
    Some(if negative { -value } else { value })
}
