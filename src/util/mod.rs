pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

/// Leading integer of a string, the way JavaScript's `parseInt` reads it.
///
/// Leading whitespace and a sign are accepted; anything after the digits is ignored.
/// Returns `None` when no digit starts the string.
pub(crate) fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = &rest[..rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return None;
    }

    let n = digits.parse::<i64>().ok()?;
    Some(if negative { -n } else { n })
}

/// Integer reading of a JSON value holding either a number or a numeric string.
pub(crate) fn json_int(v: &serde_json::Value) -> Option<i64> {
    match v {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        serde_json::Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  7 issues"), Some(7));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("+15px"), Some(15));
        assert_eq!(parse_int_prefix("0"), Some(0));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn test_json_int() {
        assert_eq!(json_int(&serde_json::json!(10)), Some(10));
        assert_eq!(json_int(&serde_json::json!(9.9)), Some(9));
        assert_eq!(json_int(&serde_json::json!("25")), Some(25));
        assert_eq!(json_int(&serde_json::json!(null)), None);
        assert_eq!(json_int(&serde_json::json!(true)), None);
    }
}
