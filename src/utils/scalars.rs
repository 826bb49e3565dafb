use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::emptiness::is_empty;

/// Country code applied to 10-digit national numbers. Single locale only.
pub const NATIONAL_PREFIX: &str = "+33";

lazy_static! {
    static ref NON_PHONE_CHARS: Regex = Regex::new(r"[^\d+]").unwrap();
    static ref NON_DIGITS: Regex = Regex::new(r"\D").unwrap();
}

/// Textual form of a value. Strings are taken as-is; literals render as
/// `True`/`False`/`None` and containers in list/dict notation with
/// single-quoted strings, e.g. `['Vendeur', 'Acheteur']`. Stored text
/// attributes already use this rendering.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => {
            let mut out = String::new();
            write_repr(other, &mut out);
            out
        }
    }
}

fn write_repr(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_quoted(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_repr(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_quoted(key, out);
                out.push_str(": ");
                write_repr(item, out);
            }
            out.push('}');
        }
    }
}

/// Single quotes unless the text holds a `'` and no `"`.
fn write_quoted(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Trimmed text, or `None` when the value is classified as empty.
pub fn norm_text(value: &Value) -> Option<String> {
    if is_empty(value) {
        return None;
    }
    Some(stringify(value).trim().to_string())
}

/// Cleans a phone number down to digits and `+`, turning `00` into `+` and
/// 10-digit national numbers (`0X XX XX XX XX`) into `+33X...`.
/// Anything else is returned structurally cleaned, not validated.
pub fn norm_phone(value: &Value) -> Option<String> {
    if is_empty(value) {
        return None;
    }
    let raw = stringify(value);
    let mut phone = NON_PHONE_CHARS.replace_all(raw.trim(), "").into_owned();

    if let Some(rest) = phone.strip_prefix("00") {
        phone = format!("+{}", rest);
    }

    let digits = NON_DIGITS.replace_all(&phone, "");
    if phone.starts_with('0') && digits.chars().count() == 10 {
        let national: String = digits.chars().skip(1).collect();
        return Some(format!("{}{}", NATIONAL_PREFIX, national));
    }

    Some(phone)
}

/// Lowercased, trimmed address. Only requires an `@`; this is a format hint,
/// not RFC 5322 validation.
pub fn norm_email(value: &Value) -> Option<String> {
    if is_empty(value) {
        return None;
    }
    let email = stringify(value).trim().to_lowercase();
    if email.contains('@') {
        Some(email)
    } else {
        None
    }
}

/// Best-effort integer coercion. Accepts `,` as decimal separator and
/// `_` digit grouping (`1_000`), and truncates toward zero; anything
/// unparseable yields `None`. Space grouping (`1 234`) is not accepted.
pub fn as_int(value: &Value) -> Option<i64> {
    if is_empty(value) {
        return None;
    }
    if let Some(n) = value.as_i64() {
        return Some(n);
    }

    let text = stringify(value).replace(',', ".");
    let parsed = strip_digit_grouping(text.trim())?.parse::<f64>().ok()?;
    if !parsed.is_finite() {
        return None;
    }

    let truncated = parsed.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Drops `_` separators that sit between two digits; any other `_`
/// makes the number invalid.
fn strip_digit_grouping(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, c) in chars.iter().enumerate() {
        if *c == '_' {
            let before = i > 0 && chars[i - 1].is_ascii_digit();
            let after = chars.get(i + 1).map_or(false, |n| n.is_ascii_digit());
            if !(before && after) {
                return None;
            }
        } else {
            out.push(*c);
        }
    }
    Some(out)
}
