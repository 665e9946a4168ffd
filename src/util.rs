use std::borrow::Cow;

/// Trims surrounding whitespace, then drops one pair of enclosing quotes.
///
/// The pair is only removed when both ends carry the same quote character, so `"a'` is kept
/// as written.
pub fn trim_with_quotes(value: &str) -> &str {
    let value = value.trim();
    let bytes = value.as_bytes();

    match (bytes.first(), bytes.last()) {
        (Some(&open @ (b'"' | b'\'')), Some(&close)) if bytes.len() >= 2 && open == close => {
            &value[1..value.len() - 1]
        }
        _ => value,
    }
}

pub fn fold_case(name: &str, ignore_case: bool) -> Cow<'_, str> {
    if ignore_case {
        Cow::Owned(name.to_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}
