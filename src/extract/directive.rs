//! Directive comments: `[tag]: a, b` and `[description]: text`.
//!
//! Each directive is a single line, optionally wrapped in an HTML comment
//! so it stays invisible in rendered markdown:
//!
//! ```text
//! <!-- [tag]: Web Application, Vite -->
//! [description]: Notes on the build pipeline
//! ```
//!
//! Keys are case-insensitive. The first occurrence of each key wins.

use std::sync::LazyLock;

use regex::Regex;

static DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:<!--\s*)?\[(tag|description)\]:\s*(.*?)\s*(?:-->)?\s*$")
        .expect("directive pattern is valid")
});

/// Tag separators: ASCII comma, full-width comma, ideographic enumeration comma.
const TAG_SEPARATORS: [char; 3] = [',', '，', '、'];

/// A recognized directive key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Tag,
    Description,
}

impl Directive {
    fn from_key(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("tag") {
            Some(Self::Tag)
        } else if key.eq_ignore_ascii_case("description") {
            Some(Self::Description)
        } else {
            None
        }
    }
}

/// Parse one line as a directive, returning its key and trimmed value.
pub fn parse_line(line: &str) -> Option<(Directive, &str)> {
    let caps = DIRECTIVE_RE.captures(line)?;
    let directive = Directive::from_key(caps.get(1)?.as_str())?;
    let value = caps.get(2).map_or("", |m| m.as_str().trim());
    Some((directive, value))
}

/// Value of the first `directive` line in `content`.
pub fn find(content: &str, directive: Directive) -> Option<&str> {
    content
        .lines()
        .filter_map(parse_line)
        .find(|(kind, _)| *kind == directive)
        .map(|(_, value)| value)
}

/// Whether `line` is a directive of the given kind.
#[inline]
pub fn is_directive(line: &str, directive: Directive) -> bool {
    parse_line(line).is_some_and(|(kind, _)| kind == directive)
}

/// Split a tag directive value into trimmed, non-empty tags.
pub fn split_tags(value: &str) -> Vec<String> {
    value
        .split(TAG_SEPARATORS)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comment_wrapped() {
        assert_eq!(
            parse_line("<!-- [tag]: Web Application, Vite -->"),
            Some((Directive::Tag, "Web Application, Vite"))
        );
        assert_eq!(
            parse_line("<!--[description]:记录Blog网站搭建所用工具及流程-->"),
            Some((Directive::Description, "记录Blog网站搭建所用工具及流程"))
        );
    }

    #[test]
    fn test_parse_bare() {
        assert_eq!(parse_line("[tag]: a, b"), Some((Directive::Tag, "a, b")));
        assert_eq!(
            parse_line("  [description]:   spaced out   "),
            Some((Directive::Description, "spaced out"))
        );
    }

    #[test]
    fn test_parse_case_insensitive_key() {
        assert_eq!(parse_line("<!-- [TAG]: Rust -->"), Some((Directive::Tag, "Rust")));
        assert_eq!(
            parse_line("[Description]: Mixed"),
            Some((Directive::Description, "Mixed"))
        );
    }

    #[test]
    fn test_parse_rejects_other_lines() {
        assert_eq!(parse_line("# Title"), None);
        assert_eq!(parse_line("see [tag]: inline in prose"), None);
        assert_eq!(parse_line("[link]: https://example.com"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(parse_line("<!-- [tag]: -->"), Some((Directive::Tag, "")));
    }

    #[test]
    fn test_find_first_occurrence() {
        let content = "# T\n<!-- [tag]: first -->\n<!-- [tag]: second -->\n";
        assert_eq!(find(content, Directive::Tag), Some("first"));
        assert_eq!(find(content, Directive::Description), None);
    }

    #[test]
    fn test_split_tags_all_separators() {
        let expected = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(split_tags("a, b, c"), expected);
        assert_eq!(split_tags("a，b，c"), expected);
        assert_eq!(split_tags("a、b、c"), expected);
        assert_eq!(split_tags("a,b， c 、 "), expected);
    }

    #[test]
    fn test_split_tags_drops_empty() {
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ，、").is_empty());
        assert_eq!(split_tags("Web应用、Vite"), vec!["Web应用", "Vite"]);
    }
}
