//! Title and description rules for markdown notes.

use super::directive::{self, Directive};

/// Text of a top-level heading line (`# Title`), if `line` is one.
///
/// Only a single `#` followed by whitespace counts; `## Sub` and `#tag`
/// are not top-level headings.
pub fn heading_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let text = rest.trim();
    (!text.is_empty()).then_some(text)
}

/// Text of the first top-level heading anywhere in `content`.
pub fn first_heading(content: &str) -> Option<&str> {
    content.lines().find_map(heading_text)
}

/// Tags from the tag directive; empty when absent or blank.
pub fn tags(content: &str) -> Vec<String> {
    directive::find(content, Directive::Tag)
        .map(directive::split_tags)
        .unwrap_or_default()
}

/// Description from the directive, else derived from the first body line.
///
/// The derived form skips the first heading and every tag directive,
/// keeps at most `limit` characters of the first non-blank line, and
/// strips `#`, `*` and backtick markers. May be empty.
pub fn description(content: &str, limit: usize) -> String {
    if let Some(value) = directive::find(content, Directive::Description) {
        return value.to_string();
    }

    let mut skipped_heading = false;
    let first_line = content.lines().find(|line| {
        if !skipped_heading && heading_text(line).is_some() {
            skipped_heading = true;
            return false;
        }
        !directive::is_directive(line, Directive::Tag) && !line.trim().is_empty()
    });

    first_line
        .map(|line| {
            line.trim_start()
                .chars()
                .take(limit)
                .filter(|c| !matches!(c, '#' | '*' | '`'))
                .collect::<String>()
                .trim()
                .to_string()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_text() {
        assert_eq!(heading_text("# Foo Title"), Some("Foo Title"));
        assert_eq!(heading_text("#\tTabbed  "), Some("Tabbed"));
        assert_eq!(heading_text("## Sub"), None);
        assert_eq!(heading_text("#hashtag"), None);
        assert_eq!(heading_text("#   "), None);
        assert_eq!(heading_text(" # indented"), None);
    }

    #[test]
    fn test_first_heading_not_on_first_line() {
        let content = "<!-- [tag]: a -->\n\n# Real Title\n# Second";
        assert_eq!(first_heading(content), Some("Real Title"));
        assert_eq!(first_heading("no heading here\n## only h2"), None);
    }

    #[test]
    fn test_tags_missing_or_blank() {
        assert!(tags("# T\nbody").is_empty());
        assert!(tags("<!-- [tag]: , -->").is_empty());
        assert_eq!(tags("<!-- [tag]: Rust、CLI -->"), vec!["Rust", "CLI"]);
    }

    #[test]
    fn test_description_directive_wins() {
        let content = "# T\n<!-- [description]: From directive -->\nFirst body line";
        assert_eq!(description(content, 150), "From directive");
    }

    #[test]
    fn test_description_from_first_body_line() {
        let content = "# Title\n<!-- [tag]: a, b -->\n\n**Bold** intro with `code`.\nSecond line";
        assert_eq!(description(content, 150), "Bold intro with code.");
    }

    #[test]
    fn test_description_skips_only_first_heading() {
        let content = "# Title\n\n# Another heading\ntext";
        assert_eq!(description(content, 150), "Another heading");
    }

    #[test]
    fn test_description_truncates_by_chars() {
        let body = "字".repeat(200);
        let content = format!("# T\n{body}");
        assert_eq!(description(&content, 150).chars().count(), 150);
    }

    #[test]
    fn test_description_empty_when_no_body() {
        assert_eq!(description("# Only a title\n\n<!-- [tag]: x -->\n", 150), "");
        assert_eq!(description("", 150), "");
        assert_eq!(description("```", 150), "");
    }
}
