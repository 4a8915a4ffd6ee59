//! Pluralization for log messages.

/// `"s"` unless `n == 1`.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `plural_count(3, "note")` -> `"3 notes"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "note"), "0 notes");
        assert_eq!(plural_count(1, "note"), "1 note");
        assert_eq!(plural_count(12, "tag"), "12 tags");
    }
}
